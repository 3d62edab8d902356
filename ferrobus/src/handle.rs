//! Request handle allocation.
//!
//! Every outgoing request is stamped with a `u32` handle that the transport
//! uses to match responses to requests. The sequencer is the sole source of
//! those handles: values are unique until the counter wraps, and a wrap is
//! assumed safe because outstanding-request counts never approach 2^32.

use std::sync::atomic::{AtomicU32, Ordering};

/// Monotonic allocator for request correlation handles.
///
/// Owned by a single client instance; the sequence persists across
/// reconnects within that instance. After `u32::MAX` the next value is `0`,
/// which is not an error condition.
///
/// Safe under unbounded concurrent callers: allocation is a single atomic
/// fetch-add, so no two concurrent calls observe the same value before a
/// wrap.
#[derive(Debug, Default)]
pub struct RequestHandleSequencer {
    next: AtomicU32,
}

impl RequestHandleSequencer {
    /// Create a sequencer starting at zero.
    pub const fn new() -> Self {
        Self {
            next: AtomicU32::new(0),
        }
    }

    /// Create a sequencer starting at an explicit value.
    pub const fn starting_at(value: u32) -> Self {
        Self {
            next: AtomicU32::new(value),
        }
    }

    /// Allocate the next handle.
    pub fn next(&self) -> u32 {
        // Atomic wrap-around is the contract, not an overflow hazard.
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_sequential_allocation() {
        let sequencer = RequestHandleSequencer::new();
        assert_eq!(sequencer.next(), 0);
        assert_eq!(sequencer.next(), 1);
        assert_eq!(sequencer.next(), 2);
    }

    #[test]
    fn test_wraps_to_zero_after_max() {
        let sequencer = RequestHandleSequencer::starting_at(u32::MAX);
        assert_eq!(sequencer.next(), u32::MAX);
        assert_eq!(sequencer.next(), 0);
        assert_eq!(sequencer.next(), 1);
    }

    #[test]
    fn test_concurrent_allocations_are_distinct() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 10_000;

        let sequencer = Arc::new(RequestHandleSequencer::new());

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let sequencer = Arc::clone(&sequencer);
                std::thread::spawn(move || {
                    (0..PER_THREAD).map(|_| sequencer.next()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for value in handle.join().expect("thread should not panic") {
                assert!(seen.insert(value), "handle {value} allocated twice");
            }
        }
        assert_eq!(seen.len(), THREADS * PER_THREAD);
    }
}
