//! Service fault fan-out.
//!
//! When the remote endpoint rejects a request with a structured fault, the
//! failure is (a) surfaced to the caller through the request's own future
//! and (b) broadcast to registered [`ServiceFaultListener`]s through a
//! decoupled notification queue:
//!
//! - **[`FaultListenerSet`]**: concurrency-safe copy-on-write listener
//!   registry, independent of any in-flight request
//! - **[`NotificationQueue`]**: FIFO delivery on a dedicated worker, never
//!   on the transport's completion threads
//!
//! Listener delivery is a side channel: it never alters the resolution of
//! the originating request, and a failing listener never disturbs request
//! processing.

mod listener;
mod queue;

pub use listener::{FaultListenerSet, ServiceFaultListener};
pub use queue::NotificationQueue;

use serde::{Deserialize, Serialize};

use crate::header::ResponseHeader;
use crate::types::StatusCode;

/// Decoded service-fault payload delivered to listeners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceFault {
    /// The response header carrying the fault's status code and the handle
    /// of the request that triggered it.
    pub response_header: ResponseHeader,
}

impl ServiceFault {
    /// Create a fault for the given request handle and status code.
    pub fn new(request_handle: u32, status: StatusCode) -> Self {
        Self {
            response_header: ResponseHeader {
                timestamp: crate::types::DateTime::now(),
                request_handle,
                service_result: status,
            },
        }
    }

    /// The fault's status code.
    pub fn status_code(&self) -> StatusCode {
        self.response_header.service_result
    }

    /// Handle of the request that triggered the fault.
    pub fn request_handle(&self) -> u32 {
        self.response_header.request_handle
    }
}
