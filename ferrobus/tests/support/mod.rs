//! Shared test doubles for integration tests.
//!
//! The collaborators record every call into one shared event log so tests
//! can assert cross-collaborator ordering, and the transport resolves
//! requests from a scripted result list.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use futures::FutureExt;
use tokio::sync::mpsc;

use ferrobus::service::attribute::{ReadRequest, ReadResponse};
use ferrobus::{
    Client, ClientConfig, NodeId, RequestError, RequestMessage, ResponseFuture, ResponseHeader,
    ResponseMessage, ServiceFault, ServiceFaultError, ServiceFaultListener, Session,
    SessionActivityListener, SessionController, SessionError, StatusCode, SubscriptionController,
    TimestampsToReturn, Transport, TransportError,
};

/// Shared, ordered log of collaborator calls.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<String>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: &str) {
        self.events.lock().expect("event log lock").push(event.to_string());
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().expect("event log lock").clone()
    }
}

/// Transport double: records calls, resolves sends from a script.
pub struct RecordingTransport {
    pub log: EventLog,
    pub fail_connect: bool,
    pub fail_disconnect: bool,
    pub sent: Mutex<Vec<RequestMessage>>,
    pub responses: Mutex<VecDeque<Result<ResponseMessage, RequestError>>>,
}

impl RecordingTransport {
    pub fn new(log: EventLog) -> Arc<Self> {
        Arc::new(Self {
            log,
            fail_connect: false,
            fail_disconnect: false,
            sent: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
        })
    }

    pub fn failing(log: EventLog, fail_connect: bool, fail_disconnect: bool) -> Arc<Self> {
        Arc::new(Self {
            log,
            fail_connect,
            fail_disconnect,
            sent: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
        })
    }

    pub fn script(&self, result: Result<ResponseMessage, RequestError>) {
        self.responses.lock().expect("responses lock").push_back(result);
    }

    pub fn sent_requests(&self) -> Vec<RequestMessage> {
        self.sent.lock().expect("sent lock").clone()
    }

    fn next_result(&self) -> Result<ResponseMessage, RequestError> {
        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or(Err(RequestError::Transport(TransportError::Closed)))
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn connect(&self) -> Result<(), TransportError> {
        self.log.record("transport.connect");
        if self.fail_connect {
            Err(TransportError::ConnectionFailed)
        } else {
            Ok(())
        }
    }

    async fn disconnect(&self) -> Result<(), TransportError> {
        self.log.record("transport.disconnect");
        if self.fail_disconnect {
            Err(TransportError::Closed)
        } else {
            Ok(())
        }
    }

    async fn send(&self, request: RequestMessage) -> Result<ResponseMessage, RequestError> {
        self.log.record("transport.send");
        self.sent.lock().expect("sent lock").push(request);
        self.next_result()
    }

    fn send_batch(&self, requests: Vec<RequestMessage>) -> Vec<ResponseFuture> {
        requests
            .into_iter()
            .map(|request| {
                self.sent.lock().expect("sent lock").push(request);
                futures::future::ready(self.next_result()).boxed()
            })
            .collect()
    }
}

/// Session controller double with a fixed active session.
pub struct RecordingSessions {
    pub log: EventLog,
    pub fail_open: bool,
    pub fail_close: bool,
    pub open_calls: AtomicUsize,
    pub session: Arc<Session>,
}

impl RecordingSessions {
    pub fn new(log: EventLog) -> Arc<Self> {
        Arc::new(Self {
            log,
            fail_open: false,
            fail_close: false,
            open_calls: AtomicUsize::new(0),
            session: Arc::new(test_session()),
        })
    }

    pub fn failing(log: EventLog, fail_open: bool, fail_close: bool) -> Arc<Self> {
        Arc::new(Self {
            log,
            fail_open,
            fail_close,
            open_calls: AtomicUsize::new(0),
            session: Arc::new(test_session()),
        })
    }

    pub fn open_call_count(&self) -> usize {
        self.open_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionController for RecordingSessions {
    async fn open_session(&self) -> Result<Arc<Session>, SessionError> {
        self.log.record("session.open");
        self.open_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_open {
            Err(SessionError::ActivationRejected {
                status: StatusCode::new(0x8000_0000),
            })
        } else {
            Ok(Arc::clone(&self.session))
        }
    }

    async fn close_session(&self) -> Result<(), SessionError> {
        self.log.record("session.close");
        if self.fail_close {
            Err(SessionError::Closed)
        } else {
            Ok(())
        }
    }

    async fn current_session(&self) -> Result<Arc<Session>, SessionError> {
        Ok(Arc::clone(&self.session))
    }

    fn add_activity_listener(&self, _listener: Arc<dyn SessionActivityListener>) {
        self.log.record("session.add_listener");
    }

    fn remove_activity_listener(&self, _listener: &Arc<dyn SessionActivityListener>) {
        self.log.record("session.remove_listener");
    }
}

/// Subscription controller double.
pub struct RecordingSubscriptions {
    pub log: EventLog,
}

impl RecordingSubscriptions {
    pub fn new(log: EventLog) -> Arc<Self> {
        Arc::new(Self { log })
    }
}

impl SubscriptionController for RecordingSubscriptions {
    fn clear_subscriptions(&self) {
        self.log.record("subscriptions.clear");
    }
}

/// Fault listener that counts invocations and signals each one.
pub struct CountingFaultListener {
    pub invocations: Mutex<Vec<StatusCode>>,
    pub notify: mpsc::UnboundedSender<()>,
}

impl CountingFaultListener {
    pub fn new(notify: mpsc::UnboundedSender<()>) -> Arc<Self> {
        Arc::new(Self {
            invocations: Mutex::new(Vec::new()),
            notify,
        })
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations.lock().expect("invocations lock").len()
    }

    pub fn codes(&self) -> Vec<StatusCode> {
        self.invocations.lock().expect("invocations lock").clone()
    }
}

impl ServiceFaultListener for CountingFaultListener {
    fn on_service_fault(&self, fault: &ServiceFault) {
        self.invocations
            .lock()
            .expect("invocations lock")
            .push(fault.status_code());
        let _ = self.notify.send(());
    }
}

/// The fixed session every `RecordingSessions` hands out.
pub fn test_session() -> Session {
    Session {
        session_id: NodeId::numeric(1, 4242),
        authentication_token: NodeId::opaque(0, vec![0xAA, 0xBB]),
        session_timeout: Duration::from_secs(120),
        server_nonce: vec![1, 2, 3, 4],
    }
}

/// Client wired to recording collaborators sharing one event log.
pub struct Harness {
    pub client: Client,
    pub transport: Arc<RecordingTransport>,
    pub sessions: Arc<RecordingSessions>,
    pub subscriptions: Arc<RecordingSubscriptions>,
    pub log: EventLog,
}

impl Harness {
    pub fn new() -> Self {
        let log = EventLog::new();
        Self::with_collaborators(
            RecordingTransport::new(log.clone()),
            RecordingSessions::new(log.clone()),
            log,
        )
    }

    pub fn with_collaborators(
        transport: Arc<RecordingTransport>,
        sessions: Arc<RecordingSessions>,
        log: EventLog,
    ) -> Self {
        let subscriptions = RecordingSubscriptions::new(log.clone());
        let client = Client::new(
            ClientConfig::default(),
            Arc::clone(&transport) as Arc<dyn Transport>,
            Arc::clone(&sessions) as Arc<dyn SessionController>,
            Arc::clone(&subscriptions) as Arc<dyn SubscriptionController>,
        );
        Self {
            client,
            transport,
            sessions,
            subscriptions,
            log,
        }
    }
}

/// An empty read response message for scripting successful sends.
pub fn read_response() -> ResponseMessage {
    ReadResponse {
        response_header: ResponseHeader::default(),
        results: Vec::new(),
    }
    .into()
}

/// A service-fault failure for scripting rejected sends.
pub fn fault_error(request_handle: u32, code: u32) -> RequestError {
    RequestError::Fault(ServiceFaultError::new(ServiceFault::new(
        request_handle,
        StatusCode::new(code),
    )))
}

/// A read request message built outside the client, for raw sends.
pub fn read_request_message(client: &Client) -> RequestMessage {
    ReadRequest {
        request_header: client.new_request_header(),
        max_age: 0.0,
        timestamps_to_return: TimestampsToReturn::Both,
        nodes_to_read: Vec::new(),
    }
    .into()
}
