//! Transport collaborator seam.
//!
//! The secure channel, low-level framing, and binary encoding live behind
//! this trait. The client runtime only sequences its lifecycle and moves
//! typed message envelopes through it.

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::error::{RequestError, TransportError};
use crate::service::{RequestMessage, ResponseMessage};

/// Future resolving one in-flight request.
pub type ResponseFuture = BoxFuture<'static, Result<ResponseMessage, RequestError>>;

/// The stateful transport the client runs over.
///
/// Implementations own connection establishment, request/response
/// correlation on the wire (keyed by the request handle stamped in each
/// header), and encoding. Completion runs on the transport's own threads;
/// nothing in this crate blocks them.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Establish the connection.
    async fn connect(&self) -> Result<(), TransportError>;

    /// Tear the connection down.
    ///
    /// In-flight requests are not cancelled; they fail naturally once the
    /// connection is gone.
    async fn disconnect(&self) -> Result<(), TransportError>;

    /// Send one request and resolve its response.
    async fn send(&self, request: RequestMessage) -> Result<ResponseMessage, RequestError>;

    /// Send a batch of requests, returning one future per request in list
    /// order: `requests[i]` is resolved by the `i`-th returned future.
    fn send_batch(&self, requests: Vec<RequestMessage>) -> Vec<ResponseFuture>;
}
