//! Decoupled fault-notification queue.
//!
//! Classified service faults are handed to listeners through a FIFO queue
//! drained by a single worker task, so listener callbacks can never block
//! request processing or re-enter the dispatcher synchronously. Each task
//! snapshots the listener set at enqueue time: listeners added afterwards do
//! not retroactively receive the fault, and listeners removed between
//! enqueue and execution are still invoked. That trade-off keeps delivery
//! consistent without per-task coordination.

use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;

use super::{ServiceFault, ServiceFaultListener};
use crate::executor::TaskExecutor;

/// One unit of deferred fault delivery: a decoded fault plus the listener
/// snapshot taken when it was enqueued.
struct NotificationTask {
    fault: ServiceFault,
    listeners: Arc<Vec<Arc<dyn ServiceFaultListener>>>,
}

/// FIFO queue delivering service faults to listeners on a dedicated worker.
///
/// The worker is spawned on the executor supplied at construction and runs
/// until the queue is dropped. Tasks execute serially in enqueue order.
pub struct NotificationQueue {
    tx: mpsc::UnboundedSender<NotificationTask>,
    submitted: AtomicU64,
    processed: Arc<AtomicU64>,
}

impl NotificationQueue {
    /// Create a queue and spawn its worker on `executor`.
    pub fn new(executor: &dyn TaskExecutor) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<NotificationTask>();
        let processed = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&processed);

        executor.spawn(
            "fault-notification-queue",
            Box::pin(async move {
                while let Some(task) = rx.recv().await {
                    deliver(&task);
                    counter.fetch_add(1, Ordering::Relaxed);
                }
                tracing::debug!("fault notification queue closed, worker exiting");
            }),
        );

        Self {
            tx,
            submitted: AtomicU64::new(0),
            processed,
        }
    }

    /// Enqueue one fault for delivery to `listeners`.
    ///
    /// Never blocks; the fault is delivered later on the worker.
    pub(crate) fn submit(
        &self,
        fault: ServiceFault,
        listeners: Arc<Vec<Arc<dyn ServiceFaultListener>>>,
    ) {
        self.submitted.fetch_add(1, Ordering::Relaxed);
        if self
            .tx
            .send(NotificationTask { fault, listeners })
            .is_err()
        {
            tracing::warn!("fault notification worker is gone, dropping fault");
        }
    }

    /// Total number of tasks submitted since construction.
    pub fn submitted(&self) -> u64 {
        self.submitted.load(Ordering::Relaxed)
    }

    /// Total number of tasks the worker has finished delivering.
    pub fn processed(&self) -> u64 {
        self.processed.load(Ordering::Relaxed)
    }
}

/// Invoke every listener in the task's snapshot exactly once.
fn deliver(task: &NotificationTask) {
    tracing::debug!(
        listeners = task.listeners.len(),
        status = %task.fault.status_code(),
        "notifying service fault listeners"
    );
    for listener in task.listeners.iter() {
        // A failing listener must not take down the worker or skip the
        // remaining listeners.
        let outcome = std::panic::catch_unwind(AssertUnwindSafe(|| {
            listener.on_service_fault(&task.fault);
        }));
        if outcome.is_err() {
            tracing::warn!(
                status = %task.fault.status_code(),
                "service fault listener panicked"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;
    use crate::executor::TokioExecutor;
    use crate::types::StatusCode;

    struct RecordingListener {
        label: &'static str,
        log: Arc<Mutex<Vec<(&'static str, u32)>>>,
        notify: mpsc::UnboundedSender<()>,
    }

    impl ServiceFaultListener for RecordingListener {
        fn on_service_fault(&self, fault: &ServiceFault) {
            self.log
                .lock()
                .expect("log lock")
                .push((self.label, fault.status_code().value()));
            let _ = self.notify.send(());
        }
    }

    struct PanickingListener;

    impl ServiceFaultListener for PanickingListener {
        fn on_service_fault(&self, _fault: &ServiceFault) {
            panic!("listener failure");
        }
    }

    fn recording(
        label: &'static str,
        log: &Arc<Mutex<Vec<(&'static str, u32)>>>,
        notify: &mpsc::UnboundedSender<()>,
    ) -> Arc<dyn ServiceFaultListener> {
        Arc::new(RecordingListener {
            label,
            log: Arc::clone(log),
            notify: notify.clone(),
        })
    }

    async fn recv_n(rx: &mut mpsc::UnboundedReceiver<()>, n: usize) {
        for _ in 0..n {
            tokio::time::timeout(Duration::from_secs(5), rx.recv())
                .await
                .expect("listener should be invoked")
                .expect("notify channel open");
        }
    }

    #[tokio::test]
    async fn test_delivers_fault_to_snapshot() {
        let queue = NotificationQueue::new(&TokioExecutor);
        let log = Arc::new(Mutex::new(Vec::new()));
        let (notify, mut notified) = mpsc::unbounded_channel();

        let listeners = Arc::new(vec![
            recording("a", &log, &notify),
            recording("b", &log, &notify),
        ]);
        queue.submit(ServiceFault::new(1, StatusCode::new(0x8001_0000)), listeners);

        recv_n(&mut notified, 2).await;

        let log = log.lock().expect("log lock");
        assert_eq!(log.len(), 2);
        assert!(log.contains(&("a", 0x8001_0000)));
        assert!(log.contains(&("b", 0x8001_0000)));
        assert_eq!(queue.submitted(), 1);
    }

    #[tokio::test]
    async fn test_fifo_order_across_tasks() {
        let queue = NotificationQueue::new(&TokioExecutor);
        let log = Arc::new(Mutex::new(Vec::new()));
        let (notify, mut notified) = mpsc::unbounded_channel();

        let listener = Arc::new(vec![recording("l", &log, &notify)]);
        for code in [0x8001_0000u32, 0x8002_0000, 0x8003_0000] {
            queue.submit(
                ServiceFault::new(1, StatusCode::new(code)),
                Arc::clone(&listener),
            );
        }

        recv_n(&mut notified, 3).await;

        let codes: Vec<u32> = log
            .lock()
            .expect("log lock")
            .iter()
            .map(|(_, code)| *code)
            .collect();
        assert_eq!(codes, vec![0x8001_0000, 0x8002_0000, 0x8003_0000]);
        assert_eq!(queue.processed(), 3);
    }

    #[tokio::test]
    async fn test_panicking_listener_does_not_stop_delivery() {
        let queue = NotificationQueue::new(&TokioExecutor);
        let log = Arc::new(Mutex::new(Vec::new()));
        let (notify, mut notified) = mpsc::unbounded_channel();

        let listeners: Arc<Vec<Arc<dyn ServiceFaultListener>>> = Arc::new(vec![
            Arc::new(PanickingListener),
            recording("survivor", &log, &notify),
        ]);
        queue.submit(
            ServiceFault::new(1, StatusCode::new(0x8001_0000)),
            listeners,
        );

        // The second listener in the same task still runs.
        recv_n(&mut notified, 1).await;

        // And the worker keeps draining later tasks.
        let listener = Arc::new(vec![recording("later", &log, &notify)]);
        queue.submit(ServiceFault::new(2, StatusCode::new(0x8002_0000)), listener);
        recv_n(&mut notified, 1).await;

        let log = log.lock().expect("log lock");
        assert!(log.contains(&("survivor", 0x8001_0000)));
        assert!(log.contains(&("later", 0x8002_0000)));
    }

    #[tokio::test]
    async fn test_counters_start_at_zero() {
        let queue = NotificationQueue::new(&TokioExecutor);
        assert_eq!(queue.submitted(), 0);
        assert_eq!(queue.processed(), 0);
    }
}
