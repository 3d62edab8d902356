//! Task executor seam.
//!
//! Background work (the fault-notification worker in particular) is spawned
//! through the [`TaskExecutor`] trait rather than directly on a runtime, so
//! callbacks never run on the transport's I/O threads and tests can supply
//! recording doubles.

use futures::future::BoxFuture;

/// Spawns background tasks on behalf of the client.
///
/// Implementations must not run the task inline: `spawn` is called from
/// constructors and from completion paths that must not block.
pub trait TaskExecutor: Send + Sync {
    /// Spawn a named background task.
    fn spawn(&self, name: &str, task: BoxFuture<'static, ()>);
}

/// Production executor backed by the Tokio runtime.
///
/// Requires an active Tokio runtime context at spawn time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioExecutor;

impl TaskExecutor for TokioExecutor {
    fn spawn(&self, name: &str, task: BoxFuture<'static, ()>) {
        tracing::debug!(task = name, "spawning background task");
        tokio::spawn(task);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::oneshot;

    use super::*;

    #[tokio::test]
    async fn test_tokio_executor_runs_task() {
        let (tx, rx) = oneshot::channel();
        let executor: Arc<dyn TaskExecutor> = Arc::new(TokioExecutor);

        executor.spawn(
            "test-task",
            Box::pin(async move {
                let _ = tx.send(42u32);
            }),
        );

        assert_eq!(rx.await, Ok(42));
    }
}
