//! Typed service messages.
//!
//! Every protocol service is a request/response pair; the pairs are bound
//! together by [`ServiceRequest`] and collected into the [`RequestMessage`]
//! and [`ResponseMessage`] envelopes the transport moves around. Encoding of
//! those envelopes onto the wire is the transport's concern, not this
//! module's.

pub mod attribute;
pub mod method;
pub mod monitored_item;
pub mod node_management;
pub mod subscription;
pub mod view;

use crate::macros::service_set;

/// Which timestamps the server returns with values and notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TimestampsToReturn {
    /// Source timestamps only.
    Source,
    /// Server timestamps only.
    Server,
    /// Both timestamps.
    Both,
    /// No timestamps.
    Neither,
}

/// Binds a request type to its response type.
///
/// Implemented for every service request struct; the generic
/// invoke path uses it to narrow the response envelope back to the typed
/// response the caller asked for.
pub trait ServiceRequest: Into<RequestMessage> + Send {
    /// Service name used in logs and mismatch errors.
    const SERVICE: &'static str;

    /// Response message paired with this request.
    type Response: TryFrom<ResponseMessage, Error = ResponseMessage> + Send;
}

service_set! {
    /// Read current attribute values.
    Read => attribute::ReadRequest : attribute::ReadResponse,
    /// Write attribute values.
    Write => attribute::WriteRequest : attribute::WriteResponse,
    /// Read historical values.
    HistoryRead => attribute::HistoryReadRequest : attribute::HistoryReadResponse,
    /// Update historical values.
    HistoryUpdate => attribute::HistoryUpdateRequest : attribute::HistoryUpdateResponse,
    /// Browse node references.
    Browse => view::BrowseRequest : view::BrowseResponse,
    /// Continue a truncated browse.
    BrowseNext => view::BrowseNextRequest : view::BrowseNextResponse,
    /// Resolve browse paths to node identifiers.
    TranslateBrowsePaths => view::TranslateBrowsePathsRequest : view::TranslateBrowsePathsResponse,
    /// Register nodes for repeated access.
    RegisterNodes => view::RegisterNodesRequest : view::RegisterNodesResponse,
    /// Release registered nodes.
    UnregisterNodes => view::UnregisterNodesRequest : view::UnregisterNodesResponse,
    /// Invoke server-side methods.
    Call => method::CallRequest : method::CallResponse,
    /// Create a subscription.
    CreateSubscription => subscription::CreateSubscriptionRequest : subscription::CreateSubscriptionResponse,
    /// Modify a subscription.
    ModifySubscription => subscription::ModifySubscriptionRequest : subscription::ModifySubscriptionResponse,
    /// Delete subscriptions.
    DeleteSubscriptions => subscription::DeleteSubscriptionsRequest : subscription::DeleteSubscriptionsResponse,
    /// Transfer subscriptions from another session.
    TransferSubscriptions => subscription::TransferSubscriptionsRequest : subscription::TransferSubscriptionsResponse,
    /// Enable or disable publishing.
    SetPublishingMode => subscription::SetPublishingModeRequest : subscription::SetPublishingModeResponse,
    /// Request the next notification message.
    Publish => subscription::PublishRequest : subscription::PublishResponse,
    /// Retransmit a missed notification message.
    Republish => subscription::RepublishRequest : subscription::RepublishResponse,
    /// Create monitored items.
    CreateMonitoredItems => monitored_item::CreateMonitoredItemsRequest : monitored_item::CreateMonitoredItemsResponse,
    /// Modify monitored items.
    ModifyMonitoredItems => monitored_item::ModifyMonitoredItemsRequest : monitored_item::ModifyMonitoredItemsResponse,
    /// Delete monitored items.
    DeleteMonitoredItems => monitored_item::DeleteMonitoredItemsRequest : monitored_item::DeleteMonitoredItemsResponse,
    /// Change monitoring modes.
    SetMonitoringMode => monitored_item::SetMonitoringModeRequest : monitored_item::SetMonitoringModeResponse,
    /// Link items to a triggering item.
    SetTriggering => monitored_item::SetTriggeringRequest : monitored_item::SetTriggeringResponse,
    /// Add nodes to the address space.
    AddNodes => node_management::AddNodesRequest : node_management::AddNodesResponse,
    /// Add references between nodes.
    AddReferences => node_management::AddReferencesRequest : node_management::AddReferencesResponse,
    /// Delete nodes from the address space.
    DeleteNodes => node_management::DeleteNodesRequest : node_management::DeleteNodesResponse,
    /// Delete references between nodes.
    DeleteReferences => node_management::DeleteReferencesRequest : node_management::DeleteReferencesResponse,
}
