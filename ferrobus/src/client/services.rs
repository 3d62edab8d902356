//! Per-service operations.
//!
//! Each method is the same shape: resolve the session, stamp a header,
//! build the typed request, dispatch. All of that lives in
//! [`Client::invoke`]; the methods below only differ in the request they
//! build.

use super::Client;
use crate::error::ClientResult;
use crate::service::attribute::{
    HistoryReadDetails, HistoryReadRequest, HistoryReadResponse, HistoryReadValueId,
    HistoryUpdateDetails, HistoryUpdateRequest, HistoryUpdateResponse, ReadRequest, ReadResponse,
    ReadValueId, WriteRequest, WriteResponse, WriteValue,
};
use crate::service::method::{CallMethodRequest, CallRequest, CallResponse};
use crate::service::monitored_item::{
    CreateMonitoredItemsRequest, CreateMonitoredItemsResponse, DeleteMonitoredItemsRequest,
    DeleteMonitoredItemsResponse, ModifyMonitoredItemsRequest, ModifyMonitoredItemsResponse,
    MonitoredItemCreateRequest, MonitoredItemModifyRequest, MonitoringMode,
    SetMonitoringModeRequest, SetMonitoringModeResponse, SetTriggeringRequest,
    SetTriggeringResponse,
};
use crate::service::node_management::{
    AddNodesItem, AddNodesRequest, AddNodesResponse, AddReferencesItem, AddReferencesRequest,
    AddReferencesResponse, DeleteNodesItem, DeleteNodesRequest, DeleteNodesResponse,
    DeleteReferencesItem, DeleteReferencesRequest, DeleteReferencesResponse,
};
use crate::service::subscription::{
    CreateSubscriptionRequest, CreateSubscriptionResponse, DeleteSubscriptionsRequest,
    DeleteSubscriptionsResponse, ModifySubscriptionRequest, ModifySubscriptionResponse,
    PublishRequest, PublishResponse, RepublishRequest, RepublishResponse,
    SetPublishingModeRequest, SetPublishingModeResponse, SubscriptionAcknowledgement,
    TransferSubscriptionsRequest, TransferSubscriptionsResponse,
};
use crate::service::view::{
    BrowseDescription, BrowseNextRequest, BrowseNextResponse, BrowsePath, BrowseRequest,
    BrowseResponse, RegisterNodesRequest, RegisterNodesResponse, TranslateBrowsePathsRequest,
    TranslateBrowsePathsResponse, UnregisterNodesRequest, UnregisterNodesResponse,
    ViewDescription,
};
use crate::service::TimestampsToReturn;
use crate::types::NodeId;

impl Client {
    /// Read the current value of one or more attributes.
    pub async fn read(
        &self,
        max_age: f64,
        timestamps_to_return: TimestampsToReturn,
        nodes_to_read: Vec<ReadValueId>,
    ) -> ClientResult<ReadResponse> {
        self.invoke(|request_header| ReadRequest {
            request_header,
            max_age,
            timestamps_to_return,
            nodes_to_read,
        })
        .await
    }

    /// Write one or more attribute values.
    pub async fn write(&self, nodes_to_write: Vec<WriteValue>) -> ClientResult<WriteResponse> {
        self.invoke(|request_header| WriteRequest {
            request_header,
            nodes_to_write,
        })
        .await
    }

    /// Read historical values.
    pub async fn history_read(
        &self,
        history_read_details: HistoryReadDetails,
        timestamps_to_return: TimestampsToReturn,
        release_continuation_points: bool,
        nodes_to_read: Vec<HistoryReadValueId>,
    ) -> ClientResult<HistoryReadResponse> {
        self.invoke(|request_header| HistoryReadRequest {
            request_header,
            history_read_details,
            timestamps_to_return,
            release_continuation_points,
            nodes_to_read,
        })
        .await
    }

    /// Update historical values.
    pub async fn history_update(
        &self,
        history_update_details: Vec<HistoryUpdateDetails>,
    ) -> ClientResult<HistoryUpdateResponse> {
        self.invoke(|request_header| HistoryUpdateRequest {
            request_header,
            history_update_details,
        })
        .await
    }

    /// Discover the references of one or more nodes.
    pub async fn browse(
        &self,
        view: ViewDescription,
        requested_max_references_per_node: u32,
        nodes_to_browse: Vec<BrowseDescription>,
    ) -> ClientResult<BrowseResponse> {
        self.invoke(|request_header| BrowseRequest {
            request_header,
            view,
            requested_max_references_per_node,
            nodes_to_browse,
        })
        .await
    }

    /// Continue or release earlier truncated browses.
    pub async fn browse_next(
        &self,
        release_continuation_points: bool,
        continuation_points: Vec<Vec<u8>>,
    ) -> ClientResult<BrowseNextResponse> {
        self.invoke(|request_header| BrowseNextRequest {
            request_header,
            release_continuation_points,
            continuation_points,
        })
        .await
    }

    /// Resolve browse paths to node identifiers.
    pub async fn translate_browse_paths(
        &self,
        browse_paths: Vec<BrowsePath>,
    ) -> ClientResult<TranslateBrowsePathsResponse> {
        self.invoke(|request_header| TranslateBrowsePathsRequest {
            request_header,
            browse_paths,
        })
        .await
    }

    /// Register nodes for efficient repeated access.
    pub async fn register_nodes(
        &self,
        nodes_to_register: Vec<NodeId>,
    ) -> ClientResult<RegisterNodesResponse> {
        self.invoke(|request_header| RegisterNodesRequest {
            request_header,
            nodes_to_register,
        })
        .await
    }

    /// Release previously registered nodes.
    pub async fn unregister_nodes(
        &self,
        nodes_to_unregister: Vec<NodeId>,
    ) -> ClientResult<UnregisterNodesResponse> {
        self.invoke(|request_header| UnregisterNodesRequest {
            request_header,
            nodes_to_unregister,
        })
        .await
    }

    /// Invoke one or more server-side methods.
    pub async fn call(
        &self,
        methods_to_call: Vec<CallMethodRequest>,
    ) -> ClientResult<CallResponse> {
        self.invoke(|request_header| CallRequest {
            request_header,
            methods_to_call,
        })
        .await
    }

    /// Create a subscription.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_subscription(
        &self,
        requested_publishing_interval: f64,
        requested_lifetime_count: u32,
        requested_max_keep_alive_count: u32,
        max_notifications_per_publish: u32,
        publishing_enabled: bool,
        priority: u8,
    ) -> ClientResult<CreateSubscriptionResponse> {
        self.invoke(|request_header| CreateSubscriptionRequest {
            request_header,
            requested_publishing_interval,
            requested_lifetime_count,
            requested_max_keep_alive_count,
            max_notifications_per_publish,
            publishing_enabled,
            priority,
        })
        .await
    }

    /// Modify an existing subscription.
    #[allow(clippy::too_many_arguments)]
    pub async fn modify_subscription(
        &self,
        subscription_id: u32,
        requested_publishing_interval: f64,
        requested_lifetime_count: u32,
        requested_max_keep_alive_count: u32,
        max_notifications_per_publish: u32,
        priority: u8,
    ) -> ClientResult<ModifySubscriptionResponse> {
        self.invoke(|request_header| ModifySubscriptionRequest {
            request_header,
            subscription_id,
            requested_publishing_interval,
            requested_lifetime_count,
            requested_max_keep_alive_count,
            max_notifications_per_publish,
            priority,
        })
        .await
    }

    /// Delete subscriptions.
    pub async fn delete_subscriptions(
        &self,
        subscription_ids: Vec<u32>,
    ) -> ClientResult<DeleteSubscriptionsResponse> {
        self.invoke(|request_header| DeleteSubscriptionsRequest {
            request_header,
            subscription_ids,
        })
        .await
    }

    /// Transfer subscriptions from another session into this one.
    pub async fn transfer_subscriptions(
        &self,
        subscription_ids: Vec<u32>,
        send_initial_values: bool,
    ) -> ClientResult<TransferSubscriptionsResponse> {
        self.invoke(|request_header| TransferSubscriptionsRequest {
            request_header,
            subscription_ids,
            send_initial_values,
        })
        .await
    }

    /// Enable or disable publishing on subscriptions.
    pub async fn set_publishing_mode(
        &self,
        publishing_enabled: bool,
        subscription_ids: Vec<u32>,
    ) -> ClientResult<SetPublishingModeResponse> {
        self.invoke(|request_header| SetPublishingModeRequest {
            request_header,
            publishing_enabled,
            subscription_ids,
        })
        .await
    }

    /// Ask the server for the next notification message.
    pub async fn publish(
        &self,
        subscription_acknowledgements: Vec<SubscriptionAcknowledgement>,
    ) -> ClientResult<PublishResponse> {
        self.invoke(|request_header| PublishRequest {
            request_header,
            subscription_acknowledgements,
        })
        .await
    }

    /// Ask the server to retransmit a missed notification message.
    pub async fn republish(
        &self,
        subscription_id: u32,
        retransmit_sequence_number: u32,
    ) -> ClientResult<RepublishResponse> {
        self.invoke(|request_header| RepublishRequest {
            request_header,
            subscription_id,
            retransmit_sequence_number,
        })
        .await
    }

    /// Create monitored items within a subscription.
    pub async fn create_monitored_items(
        &self,
        subscription_id: u32,
        timestamps_to_return: TimestampsToReturn,
        items_to_create: Vec<MonitoredItemCreateRequest>,
    ) -> ClientResult<CreateMonitoredItemsResponse> {
        self.invoke(|request_header| CreateMonitoredItemsRequest {
            request_header,
            subscription_id,
            timestamps_to_return,
            items_to_create,
        })
        .await
    }

    /// Modify monitored items within a subscription.
    pub async fn modify_monitored_items(
        &self,
        subscription_id: u32,
        timestamps_to_return: TimestampsToReturn,
        items_to_modify: Vec<MonitoredItemModifyRequest>,
    ) -> ClientResult<ModifyMonitoredItemsResponse> {
        self.invoke(|request_header| ModifyMonitoredItemsRequest {
            request_header,
            subscription_id,
            timestamps_to_return,
            items_to_modify,
        })
        .await
    }

    /// Delete monitored items from a subscription.
    pub async fn delete_monitored_items(
        &self,
        subscription_id: u32,
        monitored_item_ids: Vec<u32>,
    ) -> ClientResult<DeleteMonitoredItemsResponse> {
        self.invoke(|request_header| DeleteMonitoredItemsRequest {
            request_header,
            subscription_id,
            monitored_item_ids,
        })
        .await
    }

    /// Change the monitoring mode of monitored items.
    pub async fn set_monitoring_mode(
        &self,
        subscription_id: u32,
        monitoring_mode: MonitoringMode,
        monitored_item_ids: Vec<u32>,
    ) -> ClientResult<SetMonitoringModeResponse> {
        self.invoke(|request_header| SetMonitoringModeRequest {
            request_header,
            subscription_id,
            monitoring_mode,
            monitored_item_ids,
        })
        .await
    }

    /// Link monitored items to a triggering item.
    pub async fn set_triggering(
        &self,
        subscription_id: u32,
        triggering_item_id: u32,
        links_to_add: Vec<u32>,
        links_to_remove: Vec<u32>,
    ) -> ClientResult<SetTriggeringResponse> {
        self.invoke(|request_header| SetTriggeringRequest {
            request_header,
            subscription_id,
            triggering_item_id,
            links_to_add,
            links_to_remove,
        })
        .await
    }

    /// Add nodes to the server's address space.
    pub async fn add_nodes(
        &self,
        nodes_to_add: Vec<AddNodesItem>,
    ) -> ClientResult<AddNodesResponse> {
        self.invoke(|request_header| AddNodesRequest {
            request_header,
            nodes_to_add,
        })
        .await
    }

    /// Add references between nodes.
    pub async fn add_references(
        &self,
        references_to_add: Vec<AddReferencesItem>,
    ) -> ClientResult<AddReferencesResponse> {
        self.invoke(|request_header| AddReferencesRequest {
            request_header,
            references_to_add,
        })
        .await
    }

    /// Delete nodes from the server's address space.
    pub async fn delete_nodes(
        &self,
        nodes_to_delete: Vec<DeleteNodesItem>,
    ) -> ClientResult<DeleteNodesResponse> {
        self.invoke(|request_header| DeleteNodesRequest {
            request_header,
            nodes_to_delete,
        })
        .await
    }

    /// Delete references between nodes.
    pub async fn delete_references(
        &self,
        references_to_delete: Vec<DeleteReferencesItem>,
    ) -> ClientResult<DeleteReferencesResponse> {
        self.invoke(|request_header| DeleteReferencesRequest {
            request_header,
            references_to_delete,
        })
        .await
    }
}
