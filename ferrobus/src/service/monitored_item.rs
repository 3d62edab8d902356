//! Monitored item services: data-change monitoring within a subscription.

use crate::header::{RequestHeader, ResponseHeader};
use crate::macros::service_messages;
use crate::types::StatusCode;

use super::attribute::ReadValueId;
use super::TimestampsToReturn;

/// How a monitored item samples and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MonitoringMode {
    /// Neither sampled nor reported.
    Disabled,
    /// Sampled but queued notifications are not reported.
    Sampling,
    /// Sampled and reported.
    Reporting,
}

service_messages! {
    /// Sampling and queueing parameters for one monitored item.
    pub struct MonitoringParameters {
        /// Caller-chosen handle echoed back in notifications.
        pub client_handle: u32,
        /// Sampling interval, in milliseconds.
        pub sampling_interval: f64,
        /// Notification queue depth on the server.
        pub queue_size: u32,
        /// Whether the oldest notification is dropped on overflow.
        pub discard_oldest: bool,
    }

    /// One monitored item to create.
    pub struct MonitoredItemCreateRequest {
        /// Attribute to monitor.
        pub item_to_monitor: ReadValueId,
        /// Initial monitoring mode.
        pub monitoring_mode: MonitoringMode,
        /// Requested sampling parameters.
        pub requested_parameters: MonitoringParameters,
    }

    /// Result of creating one monitored item.
    pub struct MonitoredItemCreateResult {
        /// Result of the creation.
        pub status: StatusCode,
        /// Server-assigned monitored item identifier.
        pub monitored_item_id: u32,
        /// Sampling interval the server granted.
        pub revised_sampling_interval: f64,
        /// Queue size the server granted.
        pub revised_queue_size: u32,
    }

    /// Create monitored items within a subscription.
    pub struct CreateMonitoredItemsRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Subscription the items belong to.
        pub subscription_id: u32,
        /// Which timestamps notifications carry.
        pub timestamps_to_return: TimestampsToReturn,
        /// Items to create.
        pub items_to_create: Vec<MonitoredItemCreateRequest>,
    }

    /// Creation results, in request order.
    pub struct CreateMonitoredItemsResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One result per entry in `items_to_create`.
        pub results: Vec<MonitoredItemCreateResult>,
    }

    /// One monitored item to modify.
    pub struct MonitoredItemModifyRequest {
        /// Item to modify.
        pub monitored_item_id: u32,
        /// New sampling parameters.
        pub requested_parameters: MonitoringParameters,
    }

    /// Result of modifying one monitored item.
    pub struct MonitoredItemModifyResult {
        /// Result of the modification.
        pub status: StatusCode,
        /// Sampling interval the server granted.
        pub revised_sampling_interval: f64,
        /// Queue size the server granted.
        pub revised_queue_size: u32,
    }

    /// Modify monitored items within a subscription.
    pub struct ModifyMonitoredItemsRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Subscription the items belong to.
        pub subscription_id: u32,
        /// Which timestamps notifications carry.
        pub timestamps_to_return: TimestampsToReturn,
        /// Items to modify.
        pub items_to_modify: Vec<MonitoredItemModifyRequest>,
    }

    /// Modification results, in request order.
    pub struct ModifyMonitoredItemsResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One result per entry in `items_to_modify`.
        pub results: Vec<MonitoredItemModifyResult>,
    }

    /// Delete monitored items from a subscription.
    pub struct DeleteMonitoredItemsRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Subscription the items belong to.
        pub subscription_id: u32,
        /// Items to delete.
        pub monitored_item_ids: Vec<u32>,
    }

    /// Deletion results, in request order.
    pub struct DeleteMonitoredItemsResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One status per entry in `monitored_item_ids`.
        pub results: Vec<StatusCode>,
    }

    /// Change the monitoring mode of monitored items.
    pub struct SetMonitoringModeRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Subscription the items belong to.
        pub subscription_id: u32,
        /// Mode to apply.
        pub monitoring_mode: MonitoringMode,
        /// Items to change.
        pub monitored_item_ids: Vec<u32>,
    }

    /// Per-item results, in request order.
    pub struct SetMonitoringModeResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One status per entry in `monitored_item_ids`.
        pub results: Vec<StatusCode>,
    }

    /// Link monitored items to a triggering item.
    pub struct SetTriggeringRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Subscription the items belong to.
        pub subscription_id: u32,
        /// Item whose samples trigger the linked items to report.
        pub triggering_item_id: u32,
        /// Items to link.
        pub links_to_add: Vec<u32>,
        /// Items to unlink.
        pub links_to_remove: Vec<u32>,
    }

    /// Per-link results, in request order.
    pub struct SetTriggeringResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One status per entry in `links_to_add`.
        pub add_results: Vec<StatusCode>,
        /// One status per entry in `links_to_remove`.
        pub remove_results: Vec<StatusCode>,
    }
}
