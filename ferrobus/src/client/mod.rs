//! Client facade: connection lifecycle, header construction, and the
//! generic service-invoke path.
//!
//! A [`Client`] composes the external collaborators (transport, session
//! controller, subscription controller) with the pieces this crate owns
//! (handle sequencer, fault listener registry, notification queue,
//! dispatcher). Every public operation is asynchronous and returns
//! immediately with a future; the only suspension points are awaiting the
//! active session and awaiting the transport's send.

mod services;

use std::sync::Arc;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::dispatch::Dispatcher;
use crate::error::{ClientError, ClientResult, RequestError};
use crate::fault::{FaultListenerSet, NotificationQueue, ServiceFaultListener};
use crate::handle::RequestHandleSequencer;
use crate::header::RequestHeader;
use crate::namespace::NamespaceTable;
use crate::service::{RequestMessage, ResponseMessage, ServiceRequest};
use crate::session::{SessionActivityListener, SessionController};
use crate::subscriptions::SubscriptionController;
use crate::transport::{ResponseFuture, Transport};
use crate::types::NodeId;

/// Asynchronous protocol client over one shared authenticated session.
///
/// Many callers may issue service calls against one `Client` concurrently;
/// the handle sequencer and the fault listener registry are the only state
/// they mutate, and both are safe without external locking. The client is
/// created disconnected: call [`Client::connect`] before issuing service
/// calls.
pub struct Client {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    sessions: Arc<dyn SessionController>,
    subscriptions: Arc<dyn SubscriptionController>,
    request_handles: RequestHandleSequencer,
    fault_listeners: Arc<FaultListenerSet>,
    fault_queue: Arc<NotificationQueue>,
    dispatcher: Dispatcher,
    // TODO: refresh from the server's namespace array after each reconnect.
    namespace_table: NamespaceTable,
}

impl Client {
    /// Compose a client from its configuration and collaborators.
    ///
    /// Spawns the fault-notification worker on the configured executor, so
    /// this must run inside an async runtime context.
    pub fn new(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        sessions: Arc<dyn SessionController>,
        subscriptions: Arc<dyn SubscriptionController>,
    ) -> Self {
        let fault_listeners = Arc::new(FaultListenerSet::new());
        let fault_queue = Arc::new(NotificationQueue::new(config.executor.as_ref()));
        let dispatcher = Dispatcher::new(
            Arc::clone(&transport),
            Arc::clone(&fault_listeners),
            Arc::clone(&fault_queue),
        );
        let namespace_table = NamespaceTable::with_uris(&config.namespace_uris);

        Self {
            config,
            transport,
            sessions,
            subscriptions,
            request_handles: RequestHandleSequencer::new(),
            fault_listeners,
            fault_queue,
            dispatcher,
            namespace_table,
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The namespace table, seeded once at construction.
    pub fn namespace_table(&self) -> &NamespaceTable {
        &self.namespace_table
    }

    /// Counters of the fault-notification queue, exposed for observability.
    pub fn fault_notifications(&self) -> &NotificationQueue {
        &self.fault_queue
    }

    // =========================================================================
    // Connection lifecycle
    // =========================================================================

    /// Establish the transport, then open a session on top of it.
    ///
    /// Fails with [`ClientError::Transport`] if transport establishment
    /// fails (no session is attempted), and with [`ClientError::Session`]
    /// if activation fails afterwards. No retry happens at this layer;
    /// retry and backoff belong to the session controller.
    pub async fn connect(&self) -> ClientResult<&Self> {
        tracing::debug!(endpoint = %self.config.endpoint_url, "connecting transport");
        self.transport.connect().await?;

        tracing::debug!("transport connected, opening session");
        self.sessions.open_session().await?;

        tracing::debug!("session open");
        Ok(self)
    }

    /// Tear everything down, best effort.
    ///
    /// Strictly ordered: subscriptions are cleared first, then the session
    /// is closed, then the transport. Clearing subscriptions first stops
    /// publish traffic whose mid-teardown failures the session machinery
    /// would read as connection loss and answer with a reconnect. Failures
    /// in the later steps are absorbed: a session that will not close is
    /// treated as already closed, and the result is always the client
    /// handle.
    pub async fn disconnect(&self) -> &Self {
        self.subscriptions.clear_subscriptions();

        if let Err(err) = self.sessions.close_session().await {
            tracing::debug!(error = %err, "session close failed during disconnect, treating as already closed");
        }

        if let Err(err) = self.transport.disconnect().await {
            tracing::debug!(error = %err, "transport disconnect failed during teardown");
        }

        tracing::debug!("disconnected");
        self
    }

    // =========================================================================
    // Request headers and handles
    // =========================================================================

    /// Allocate the next request handle.
    ///
    /// Exposed for collaborators that need header-compatible identifiers
    /// outside the builder (batch senders in particular).
    pub fn next_request_handle(&self) -> u32 {
        self.request_handles.next()
    }

    /// Build a request header.
    ///
    /// With no token the null token is used, which supports administrative
    /// calls issued before a session exists. With no override the
    /// configured default timeout applies.
    pub fn request_header(
        &self,
        authentication_token: Option<&NodeId>,
        timeout_override: Option<Duration>,
    ) -> RequestHeader {
        RequestHeader::new(
            authentication_token.cloned().unwrap_or(NodeId::NULL),
            self.request_handles.next(),
            self.config.return_diagnostics,
            timeout_override.unwrap_or(self.config.request_timeout),
        )
    }

    /// Build a header with the null authentication token.
    pub fn new_request_header(&self) -> RequestHeader {
        self.request_header(None, None)
    }

    /// Build a header with the null authentication token and a custom
    /// timeout.
    pub fn new_request_header_with_timeout(&self, timeout: Duration) -> RequestHeader {
        self.request_header(None, Some(timeout))
    }

    /// Build a header with the given authentication token.
    pub fn new_request_header_with_token(&self, token: &NodeId) -> RequestHeader {
        self.request_header(Some(token), None)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Send one already-built request message.
    ///
    /// The transport's result is returned unmodified; fault listeners, if
    /// any, observe classified failures on the notification queue's worker.
    pub async fn send(&self, request: RequestMessage) -> Result<ResponseMessage, RequestError> {
        self.dispatcher.send(request).await
    }

    /// Send a batch of already-built request messages.
    ///
    /// `requests[i]` is resolved by the `i`-th returned future.
    pub fn send_batch(&self, requests: Vec<RequestMessage>) -> Vec<ResponseFuture> {
        self.dispatcher.send_batch(requests)
    }

    /// Resolve session, stamp a header, build the typed request, dispatch,
    /// and narrow the response.
    ///
    /// Every service operation goes through here; the per-service methods
    /// only differ in the request they build.
    pub(crate) async fn invoke<R, F>(&self, build: F) -> ClientResult<R::Response>
    where
        R: ServiceRequest,
        F: FnOnce(RequestHeader) -> R,
    {
        let session = self.sessions.current_session().await?;
        let header = self.request_header(Some(session.authentication_token()), None);
        let request: RequestMessage = build(header).into();

        let response = self.dispatcher.send(request).await?;

        R::Response::try_from(response).map_err(|mismatch| {
            tracing::warn!(
                expected = R::SERVICE,
                received = mismatch.service_name(),
                "transport resolved a response for a different service"
            );
            ClientError::UnexpectedResponse {
                service: R::SERVICE,
            }
        })
    }

    // =========================================================================
    // Listener registration
    // =========================================================================

    /// Register a service fault listener.
    pub fn add_fault_listener(&self, listener: Arc<dyn ServiceFaultListener>) {
        self.fault_listeners.add(listener);
    }

    /// Remove a previously registered service fault listener.
    ///
    /// Returns whether the listener was present. Faults snapshotted before
    /// the removal may still be delivered to it.
    pub fn remove_fault_listener(&self, listener: &Arc<dyn ServiceFaultListener>) -> bool {
        self.fault_listeners.remove(listener)
    }

    /// Register a session activity listener with the session controller.
    pub fn add_session_activity_listener(&self, listener: Arc<dyn SessionActivityListener>) {
        self.sessions.add_activity_listener(listener);
        tracing::debug!("added session activity listener");
    }

    /// Remove a session activity listener from the session controller.
    pub fn remove_session_activity_listener(&self, listener: &Arc<dyn SessionActivityListener>) {
        self.sessions.remove_activity_listener(listener);
        tracing::debug!("removed session activity listener");
    }
}
