//! Subscription services: publish/republish and subscription management.

use crate::header::{RequestHeader, ResponseHeader};
use crate::macros::service_messages;
use crate::types::{DateTime, StatusCode};

service_messages! {
    /// Create a subscription.
    pub struct CreateSubscriptionRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Requested publishing interval, in milliseconds.
        pub requested_publishing_interval: f64,
        /// Publish cycles the subscription survives without a publish
        /// request before the server drops it.
        pub requested_lifetime_count: u32,
        /// Publish cycles between keep-alive notifications.
        pub requested_max_keep_alive_count: u32,
        /// Per-publish cap on notifications; zero means no cap.
        pub max_notifications_per_publish: u32,
        /// Whether publishing starts enabled.
        pub publishing_enabled: bool,
        /// Relative priority among this session's subscriptions.
        pub priority: u8,
    }

    /// The created subscription and the parameters the server settled on.
    pub struct CreateSubscriptionResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// Server-assigned subscription identifier.
        pub subscription_id: u32,
        /// Publishing interval the server granted.
        pub revised_publishing_interval: f64,
        /// Lifetime count the server granted.
        pub revised_lifetime_count: u32,
        /// Keep-alive count the server granted.
        pub revised_max_keep_alive_count: u32,
    }

    /// Modify an existing subscription.
    pub struct ModifySubscriptionRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Subscription to modify.
        pub subscription_id: u32,
        /// Requested publishing interval, in milliseconds.
        pub requested_publishing_interval: f64,
        /// Requested lifetime count.
        pub requested_lifetime_count: u32,
        /// Requested keep-alive count.
        pub requested_max_keep_alive_count: u32,
        /// Per-publish cap on notifications; zero means no cap.
        pub max_notifications_per_publish: u32,
        /// Relative priority among this session's subscriptions.
        pub priority: u8,
    }

    /// The parameters the server settled on after modification.
    pub struct ModifySubscriptionResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// Publishing interval the server granted.
        pub revised_publishing_interval: f64,
        /// Lifetime count the server granted.
        pub revised_lifetime_count: u32,
        /// Keep-alive count the server granted.
        pub revised_max_keep_alive_count: u32,
    }

    /// Delete subscriptions.
    pub struct DeleteSubscriptionsRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Subscriptions to delete.
        pub subscription_ids: Vec<u32>,
    }

    /// Per-subscription deletion results, in request order.
    pub struct DeleteSubscriptionsResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One status per entry in `subscription_ids`.
        pub results: Vec<StatusCode>,
    }

    /// Result of transferring one subscription.
    pub struct TransferResult {
        /// Result of the transfer.
        pub status: StatusCode,
        /// Sequence numbers available for republish after the transfer.
        pub available_sequence_numbers: Vec<u32>,
    }

    /// Transfer subscriptions from another session into this one.
    pub struct TransferSubscriptionsRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Subscriptions to transfer.
        pub subscription_ids: Vec<u32>,
        /// Whether the server resends the latest value of every monitored
        /// item after the transfer.
        pub send_initial_values: bool,
    }

    /// Transfer results, in request order.
    pub struct TransferSubscriptionsResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One result per entry in `subscription_ids`.
        pub results: Vec<TransferResult>,
    }

    /// Enable or disable publishing on subscriptions.
    pub struct SetPublishingModeRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Whether publishing is enabled.
        pub publishing_enabled: bool,
        /// Subscriptions to change.
        pub subscription_ids: Vec<u32>,
    }

    /// Per-subscription results, in request order.
    pub struct SetPublishingModeResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// One status per entry in `subscription_ids`.
        pub results: Vec<StatusCode>,
    }

    /// Acknowledges one delivered notification message.
    pub struct SubscriptionAcknowledgement {
        /// Subscription the message belonged to.
        pub subscription_id: u32,
        /// Sequence number being acknowledged.
        pub sequence_number: u32,
    }

    /// One batch of notifications published by the server.
    pub struct NotificationMessage {
        /// Sequence number of this message.
        pub sequence_number: u32,
        /// When the server published it.
        pub publish_time: DateTime,
    }

    /// Ask the server for the next notification message.
    pub struct PublishRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Messages acknowledged since the last publish.
        pub subscription_acknowledgements: Vec<SubscriptionAcknowledgement>,
    }

    /// The next notification message for one subscription.
    pub struct PublishResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// Subscription the message belongs to.
        pub subscription_id: u32,
        /// The notification message.
        pub notification_message: NotificationMessage,
        /// Whether more messages are queued for immediate delivery.
        pub more_notifications: bool,
    }

    /// Ask the server to retransmit a missed notification message.
    pub struct RepublishRequest {
        /// Per-request metadata.
        pub request_header: RequestHeader,
        /// Subscription the message belonged to.
        pub subscription_id: u32,
        /// Sequence number to retransmit.
        pub retransmit_sequence_number: u32,
    }

    /// The retransmitted notification message.
    pub struct RepublishResponse {
        /// Per-response metadata.
        pub response_header: ResponseHeader,
        /// The retransmitted message.
        pub notification_message: NotificationMessage,
    }
}
