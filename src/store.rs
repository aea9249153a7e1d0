// In-memory rolling window of samples.
// Single writer (the poller), many readers (request handlers). Readers copy the window out
// under the lock and do all derived work on the copy.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::Sample;

pub struct SampleStore {
    capacity: usize,
    samples: Mutex<VecDeque<Sample>>,
}

impl SampleStore {
    /// Creates an empty store holding at most `capacity` samples (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            samples: Mutex::new(VecDeque::with_capacity(capacity + 1)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends at the tail, evicting from the head until the window fits `capacity`.
    ///
    /// A sample stamped earlier than the current tail is clamped to the tail's timestamp so the
    /// window stays ordered even if the wall clock steps backwards.
    pub fn append(&self, sample: Sample) {
        let mut samples = self.lock();
        let sample = match samples.back() {
            Some(last) if sample.captured_at < last.captured_at => {
                tracing::warn!(
                    operation = "append",
                    captured_at = %sample.captured_at,
                    last_captured_at = %last.captured_at,
                    "sample older than tail; clamping timestamp"
                );
                Sample {
                    captured_at: last.captured_at,
                    ..sample
                }
            }
            _ => sample,
        };
        samples.push_back(sample);
        while samples.len() > self.capacity {
            samples.pop_front();
        }
    }

    /// Copy of the window, oldest first, taken at a single instant.
    pub fn snapshot(&self) -> Vec<Sample> {
        self.lock().iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // push/pop leave the deque consistent even if a holder panicked.
    fn lock(&self) -> MutexGuard<'_, VecDeque<Sample>> {
        self.samples.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
