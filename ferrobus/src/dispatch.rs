//! Request dispatch and fault correlation.
//!
//! The dispatcher forwards requests to the transport and, only when fault
//! listeners are registered, inspects failures on the way back: a failure
//! classified as a service fault is handed to the notification queue, and
//! the caller-visible result is returned untouched either way. With no
//! listeners registered the transport result passes straight through, with
//! no observer attached and no extra allocation.

use std::sync::Arc;

use futures::FutureExt;

use crate::error::RequestError;
use crate::fault::{FaultListenerSet, NotificationQueue};
use crate::service::{RequestMessage, ResponseMessage};
use crate::transport::{ResponseFuture, Transport};

/// Sends requests through the transport, wiring fault correlation on demand.
#[derive(Clone)]
pub(crate) struct Dispatcher {
    transport: Arc<dyn Transport>,
    listeners: Arc<FaultListenerSet>,
    queue: Arc<NotificationQueue>,
}

impl Dispatcher {
    pub(crate) fn new(
        transport: Arc<dyn Transport>,
        listeners: Arc<FaultListenerSet>,
        queue: Arc<NotificationQueue>,
    ) -> Self {
        Self {
            transport,
            listeners,
            queue,
        }
    }

    /// Send one request, resolving the transport's own result.
    ///
    /// Fault observation never alters the returned result; listeners see
    /// the fault later, on the notification queue's worker.
    pub(crate) async fn send(
        &self,
        request: RequestMessage,
    ) -> Result<ResponseMessage, RequestError> {
        tracing::debug!(
            service = request.service_name(),
            request_handle = request.request_header().request_handle,
            "dispatching request"
        );

        // Registry checked once at send time: an empty set means the
        // transport result passes through with no observer attached.
        if self.listeners.is_empty() {
            return self.transport.send(request).await;
        }

        let result = self.transport.send(request).await;
        if let Err(err) = &result {
            self.notify_if_fault(err);
        }
        result
    }

    /// Send a batch, preserving `requests[i]` ↔ `futures[i]` correspondence.
    ///
    /// Each returned future resolves its own request; classified faults
    /// produce one notification task per fault, never one per batch.
    pub(crate) fn send_batch(&self, requests: Vec<RequestMessage>) -> Vec<ResponseFuture> {
        let futures = self.transport.send_batch(requests);

        if self.listeners.is_empty() {
            return futures;
        }

        futures
            .into_iter()
            .map(|future| {
                let observer = self.clone();
                async move {
                    let result = future.await;
                    if let Err(err) = &result {
                        observer.notify_if_fault(err);
                    }
                    result
                }
                .boxed()
            })
            .collect()
    }

    /// Enqueue one notification task if `err` classifies as a service fault.
    ///
    /// All other failures (transport errors, timeouts, local encoding
    /// errors) are never routed to listeners.
    fn notify_if_fault(&self, err: &RequestError) {
        let Some(fault) = err.as_service_fault() else {
            return;
        };

        // The set may have drained since send time; snapshot once and bail
        // if nobody is listening anymore.
        let snapshot = self.listeners.snapshot();
        if snapshot.is_empty() {
            return;
        }

        tracing::debug!(
            listeners = snapshot.len(),
            status = %fault.status_code(),
            request_handle = fault.request_handle(),
            "classified service fault, enqueueing notification"
        );
        self.queue.submit(fault.clone(), snapshot);
    }
}
