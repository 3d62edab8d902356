//! Session collaborator seam.
//!
//! The session state machine (activation, keep-alive, reconnection and
//! retry) is external. The client runtime reads the active session through
//! [`SessionController::current_session`] and never holds a long-lived
//! mutable reference: at most one authenticated session is live per client
//! instance, and the controller alone owns and mutates it.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::types::NodeId;

/// An authenticated session produced by successful activation.
///
/// Invalidated by disconnect or by the controller's own failure detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Server-assigned session identifier.
    pub session_id: NodeId,
    /// Token stamped into every request header issued under this session.
    pub authentication_token: NodeId,
    /// Idle timeout the server granted.
    pub session_timeout: Duration,
    /// Nonce from the most recent activation.
    pub server_nonce: Vec<u8>,
}

impl Session {
    /// The authentication token for request headers.
    pub fn authentication_token(&self) -> &NodeId {
        &self.authentication_token
    }
}

/// Observer of session lifecycle transitions.
///
/// Both methods default to no-ops so implementors can watch one direction
/// only.
pub trait SessionActivityListener: Send + Sync {
    /// The session became active (first activation or reactivation).
    fn on_session_active(&self, _session: &Session) {}

    /// The session became inactive.
    fn on_session_inactive(&self, _session: &Session) {}
}

/// The external session state machine.
#[async_trait]
pub trait SessionController: Send + Sync {
    /// Create and activate a session on the connected transport.
    async fn open_session(&self) -> Result<Arc<Session>, SessionError>;

    /// Close the active session.
    async fn close_session(&self) -> Result<(), SessionError>;

    /// Resolve the active session.
    ///
    /// Resolves once per activation and is shared by all concurrent
    /// awaiters; the controller guarantees single-flight activation.
    async fn current_session(&self) -> Result<Arc<Session>, SessionError>;

    /// Register a session activity listener.
    fn add_activity_listener(&self, listener: Arc<dyn SessionActivityListener>);

    /// Remove a previously registered session activity listener.
    fn remove_activity_listener(&self, listener: &Arc<dyn SessionActivityListener>);
}
