//! Fault listener registry.
//!
//! Listeners live from registration to explicit removal, independent of any
//! in-flight request. The registry is copy-on-write: readers take an atomic
//! snapshot, writers swap in a rebuilt list, and neither ever blocks the
//! other.

use std::sync::Arc;

use arc_swap::ArcSwap;

use super::ServiceFault;

/// Callback invoked with each decoded service fault.
///
/// Invocations happen on the notification queue's worker, never on the
/// transport's completion threads, and always after the originating
/// request's future has been resolved independently.
pub trait ServiceFaultListener: Send + Sync {
    /// Handle one decoded service fault.
    fn on_service_fault(&self, fault: &ServiceFault);
}

/// Concurrency-safe registry of fault listeners.
///
/// Registration and removal may race with each other and with snapshot
/// readers on arbitrary threads; no external locking is required. Removal
/// is by identity: the same `Arc` that was added must be passed to remove.
#[derive(Default)]
pub struct FaultListenerSet {
    listeners: ArcSwap<Vec<Arc<dyn ServiceFaultListener>>>,
}

impl FaultListenerSet {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            listeners: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// Register a listener.
    pub fn add(&self, listener: Arc<dyn ServiceFaultListener>) {
        self.listeners.rcu(|current| {
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend(current.iter().cloned());
            next.push(Arc::clone(&listener));
            next
        });
        tracing::debug!(listeners = self.len(), "added service fault listener");
    }

    /// Remove a previously registered listener.
    ///
    /// Returns whether the listener was present. Faults snapshotted before
    /// the removal may still reach the listener; faults snapshotted after
    /// it never will.
    pub fn remove(&self, listener: &Arc<dyn ServiceFaultListener>) -> bool {
        let previous = self.listeners.rcu(|current| {
            current
                .iter()
                .filter(|l| !Arc::ptr_eq(l, listener))
                .cloned()
                .collect::<Vec<_>>()
        });
        let removed = previous.iter().any(|l| Arc::ptr_eq(l, listener));
        if removed {
            tracing::debug!(listeners = self.len(), "removed service fault listener");
        }
        removed
    }

    /// Atomic snapshot of the current listener list.
    pub fn snapshot(&self) -> Arc<Vec<Arc<dyn ServiceFaultListener>>> {
        self.listeners.load_full()
    }

    /// Whether any listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.load().is_empty()
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.load().len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::types::StatusCode;

    struct CountingListener {
        invocations: AtomicUsize,
    }

    impl CountingListener {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                invocations: AtomicUsize::new(0),
            })
        }

        fn count(&self) -> usize {
            self.invocations.load(Ordering::SeqCst)
        }
    }

    impl ServiceFaultListener for CountingListener {
        fn on_service_fault(&self, _fault: &ServiceFault) {
            self.invocations.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_add_and_remove() {
        let set = FaultListenerSet::new();
        assert!(set.is_empty());

        let listener = CountingListener::new();
        let as_dyn: Arc<dyn ServiceFaultListener> = listener.clone();

        set.add(Arc::clone(&as_dyn));
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());

        assert!(set.remove(&as_dyn));
        assert!(set.is_empty());

        // Removing twice reports absence.
        assert!(!set.remove(&as_dyn));
    }

    #[test]
    fn test_snapshot_is_stable_across_removal() {
        let set = FaultListenerSet::new();
        let listener = CountingListener::new();
        let as_dyn: Arc<dyn ServiceFaultListener> = listener.clone();
        set.add(Arc::clone(&as_dyn));

        let snapshot = set.snapshot();
        set.remove(&as_dyn);

        // The snapshot taken before removal still holds the listener.
        assert_eq!(snapshot.len(), 1);
        assert!(set.snapshot().is_empty());

        snapshot[0].on_service_fault(&ServiceFault::new(1, StatusCode::new(0x8001_0000)));
        assert_eq!(listener.count(), 1);
    }

    #[test]
    fn test_concurrent_adds_are_not_lost() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 100;

        let set = Arc::new(FaultListenerSet::new());

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let set = Arc::clone(&set);
                std::thread::spawn(move || {
                    for _ in 0..PER_THREAD {
                        let listener: Arc<dyn ServiceFaultListener> = CountingListener::new();
                        set.add(listener);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("thread should not panic");
        }

        assert_eq!(set.len(), THREADS * PER_THREAD);
    }

    #[test]
    fn test_concurrent_add_remove_consistency() {
        const ROUNDS: usize = 200;

        let set = Arc::new(FaultListenerSet::new());

        // One stable listener that must survive the churn.
        let stable = CountingListener::new();
        let stable_dyn: Arc<dyn ServiceFaultListener> = stable.clone();
        set.add(Arc::clone(&stable_dyn));

        let churn: Vec<_> = (0..4)
            .map(|_| {
                let set = Arc::clone(&set);
                std::thread::spawn(move || {
                    for _ in 0..ROUNDS {
                        let listener: Arc<dyn ServiceFaultListener> = CountingListener::new();
                        set.add(Arc::clone(&listener));
                        assert!(set.remove(&listener));
                    }
                })
            })
            .collect();

        for handle in churn {
            handle.join().expect("thread should not panic");
        }

        // All churned listeners removed themselves; only the stable one remains.
        assert_eq!(set.len(), 1);
        assert!(set.snapshot().iter().any(|l| Arc::ptr_eq(l, &stable_dyn)));
    }
}
