//! Error types for the client runtime.
//!
//! The taxonomy separates the layers a call can fail in:
//!
//! - [`TransportError`]: connectivity-level failures (connect, send,
//!   disconnect at the wire level)
//! - [`SessionError`]: failures establishing or maintaining the
//!   authenticated session
//! - [`ServiceFaultError`]: a structured rejection returned by the remote
//!   endpoint for a specific request
//! - [`RequestError`]: everything that can fail a single in-flight request
//! - [`ClientError`]: the caller-facing union
//!
//! Only [`ServiceFaultError`] is ever routed to fault listeners; transport
//! failures, timeouts, and local encoding errors fail the request future and
//! nothing else.

use crate::fault::ServiceFault;
use crate::types::StatusCode;

/// Errors that can occur at the transport level.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    /// The connection to the endpoint could not be established.
    #[error("connection to the endpoint failed")]
    ConnectionFailed,

    /// The connection was lost while in use.
    #[error("connection lost")]
    ConnectionLost,

    /// The connection attempt timed out.
    #[error("connection attempt timed out")]
    Timeout,

    /// The transport is closed or shutting down.
    #[error("transport closed")]
    Closed,

    /// I/O operation failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        TransportError::Io(err.to_string())
    }
}

/// Errors that can occur establishing or maintaining the session.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionError {
    /// The server rejected session activation.
    #[error("session activation rejected: {status}")]
    ActivationRejected {
        /// Status code returned by the server.
        status: StatusCode,
    },

    /// The authentication token was rejected as invalid.
    #[error("authentication token invalid")]
    TokenInvalid,

    /// No session is currently open.
    #[error("no session is open")]
    NotOpen,

    /// The session has been closed.
    #[error("session closed")]
    Closed,
}

/// A structured service-level rejection returned by the remote endpoint.
///
/// This is the only error kind that fault listeners ever observe. It fails
/// the originating request's future like any other error; listener delivery
/// is a side channel on top of that.
#[derive(Debug, Clone, thiserror::Error)]
#[error("service fault: {}", fault.status_code())]
pub struct ServiceFaultError {
    /// The decoded fault payload.
    pub fault: ServiceFault,
}

impl ServiceFaultError {
    /// Create a fault error from its decoded payload.
    pub fn new(fault: ServiceFault) -> Self {
        Self { fault }
    }
}

/// Errors that can fail a single in-flight request.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestError {
    /// The request failed at the transport level.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The remote endpoint rejected the request with a service fault.
    #[error("{0}")]
    Fault(#[from] ServiceFaultError),

    /// The request timed out waiting for its response.
    #[error("request timed out")]
    Timeout,

    /// The request was rejected locally before any network activity.
    #[error("encoding error: {0}")]
    Encoding(String),
}

impl RequestError {
    /// Classify this error as a service fault, if it is one.
    ///
    /// A failure counts as a service fault only when the error itself, or
    /// its immediate wrapped cause, carries a [`ServiceFault`] produced by
    /// the remote endpoint. Transport failures, timeouts, and local encoding
    /// errors never classify.
    pub fn as_service_fault(&self) -> Option<&ServiceFault> {
        if let RequestError::Fault(err) = self {
            return Some(&err.fault);
        }

        std::error::Error::source(self)
            .and_then(|source| source.downcast_ref::<ServiceFaultError>())
            .map(|err| &err.fault)
    }
}

/// Errors surfaced by [`Client`](crate::Client) operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (propagated from `connect()` and raw sends).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Session-level failure (propagated from `connect()` and from service
    /// calls awaiting a session that fails to resolve).
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// A service call failed.
    #[error("request failed: {0}")]
    Request(#[from] RequestError),

    /// The transport resolved a request with a response for a different
    /// service.
    #[error("unexpected response to {service} request")]
    UnexpectedResponse {
        /// Name of the service that was invoked.
        service: &'static str,
    },
}

impl ClientError {
    /// Classify this error as a service fault, if it is one.
    pub fn as_service_fault(&self) -> Option<&ServiceFault> {
        match self {
            ClientError::Request(err) => err.as_service_fault(),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::ServiceFault;
    use crate::header::ResponseHeader;
    use crate::types::DateTime;

    fn fault(code: u32) -> ServiceFault {
        ServiceFault {
            response_header: ResponseHeader {
                timestamp: DateTime::NULL,
                request_handle: 7,
                service_result: StatusCode::new(code),
            },
        }
    }

    #[test]
    fn test_fault_variant_classifies() {
        let err = RequestError::Fault(ServiceFaultError::new(fault(0x8001_0000)));
        let classified = err.as_service_fault().expect("should classify");
        assert_eq!(classified.status_code(), StatusCode::new(0x8001_0000));
    }

    #[test]
    fn test_transport_error_never_classifies() {
        let err = RequestError::Transport(TransportError::ConnectionLost);
        assert!(err.as_service_fault().is_none());
    }

    #[test]
    fn test_timeout_never_classifies() {
        assert!(RequestError::Timeout.as_service_fault().is_none());
    }

    #[test]
    fn test_local_encoding_error_never_classifies() {
        let err = RequestError::Encoding("bad payload".to_string());
        assert!(err.as_service_fault().is_none());
    }

    #[test]
    fn test_client_error_delegates_classification() {
        let err = ClientError::Request(RequestError::Fault(ServiceFaultError::new(fault(
            0x8002_0000,
        ))));
        assert!(err.as_service_fault().is_some());

        let err = ClientError::Session(SessionError::NotOpen);
        assert!(err.as_service_fault().is_none());
    }

    #[test]
    fn test_error_display() {
        let err = RequestError::Fault(ServiceFaultError::new(fault(0x8001_0000)));
        assert!(err.to_string().contains("0x80010000"));

        let err = ClientError::UnexpectedResponse { service: "Read" };
        assert!(err.to_string().contains("Read"));
    }
}
