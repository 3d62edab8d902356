//! Request and response headers.
//!
//! Every service request carries a [`RequestHeader`] built fresh at send
//! time: the session's authentication token (or the null token before a
//! session exists), a wall-clock timestamp, the next correlation handle, and
//! configuration-supplied defaults. Headers are immutable once constructed
//! and owned solely by the request they accompany.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::{DateTime, NodeId, StatusCode};

/// Per-request metadata stamped on every outgoing service request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestHeader {
    /// Authentication token of the active session, or [`NodeId::NULL`] for
    /// pre-session administrative calls.
    pub authentication_token: NodeId,
    /// Wall-clock time the request was built.
    pub timestamp: DateTime,
    /// Correlation handle, unique among in-flight requests.
    pub request_handle: u32,
    /// Diagnostics mask requested from the server.
    pub return_diagnostics: u32,
    /// Audit entry to associate with the request, if any.
    pub audit_entry_id: Option<String>,
    /// How long the server may take before the request is abandoned.
    pub timeout_hint: Duration,
}

impl RequestHeader {
    /// Build a header with the current wall-clock time and no audit entry.
    pub fn new(
        authentication_token: NodeId,
        request_handle: u32,
        return_diagnostics: u32,
        timeout_hint: Duration,
    ) -> Self {
        Self {
            authentication_token,
            timestamp: DateTime::now(),
            request_handle,
            return_diagnostics,
            audit_entry_id: None,
            timeout_hint,
        }
    }
}

/// Per-response metadata echoed back by the server.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseHeader {
    /// Wall-clock time the server produced the response.
    pub timestamp: DateTime,
    /// Handle of the request this response answers.
    pub request_handle: u32,
    /// Overall result of the service call.
    pub service_result: StatusCode,
}
