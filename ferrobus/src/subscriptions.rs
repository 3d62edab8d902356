//! Subscription collaborator seam.
//!
//! Subscription and monitored-item bookkeeping is external. The client
//! runtime depends on a single ordering contract during shutdown: all
//! subscriptions must be cleared before the session close is awaited, so
//! that in-flight publish traffic cannot fail mid-teardown and trick the
//! session machinery into an automatic reconnect.

/// The external subscription bookkeeper.
pub trait SubscriptionController: Send + Sync {
    /// Drop all client-side subscription state and stop issuing publish
    /// requests.
    ///
    /// Synchronous (or fire-and-forget): the call must have been made
    /// before the session close is awaited during disconnect.
    fn clear_subscriptions(&self);
}
