//! Scatter-gather worker pool implementation.

use super::PoolConfig;
use crate::error::TaskFailure;
use crate::outcome::{TaskClock, TaskResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tracing::debug;

/// Bounded-concurrency executor for one batch of homogeneous tasks.
///
/// At most `worker_count` task bodies execute simultaneously; additional
/// tasks queue on the internal semaphore until a worker slot frees up.
/// Task bodies run on the blocking thread pool, so file I/O or codec calls
/// in one task never starve the others.
///
/// A failure inside a task body - including a panic - is captured as an
/// `Err` outcome on that task's result and never aborts sibling tasks or
/// the batch.
///
/// Pools are cheap to create and are intended to be used for one batch at
/// a time; create a fresh pool per unrelated concurrent batch.
#[derive(Debug)]
pub struct WorkerPool {
    /// Effective worker count, fixed at construction
    worker_count: usize,

    /// Semaphore bounding concurrent task bodies
    semaphore: Arc<Semaphore>,

    /// Current number of executing task bodies (for metrics)
    in_flight: Arc<AtomicUsize>,

    /// Peak concurrent task bodies observed (for tuning and tests)
    peak_in_flight: Arc<AtomicUsize>,
}

impl WorkerPool {
    /// Creates a pool sized by the given configuration.
    pub fn new(config: PoolConfig) -> Self {
        let worker_count = config.effective_workers();
        debug!(worker_count, "Creating worker pool");

        Self {
            worker_count,
            semaphore: Arc::new(Semaphore::new(worker_count)),
            in_flight: Arc::new(AtomicUsize::new(0)),
            peak_in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns the fixed worker count for this pool.
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Returns the current number of executing task bodies.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Relaxed)
    }

    /// Returns the peak number of concurrent task bodies observed.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::Relaxed)
    }

    /// Runs every task in the batch and gathers their results.
    ///
    /// One task is spawned per input; each waits for a worker slot, runs
    /// `task_fn` on the blocking thread pool, and reports back with its
    /// submission index. The returned sequence preserves input order
    /// regardless of completion order, and always contains exactly one
    /// result per input.
    ///
    /// This call returns only once the whole batch has completed; there is
    /// no streaming of partial results and no cancellation.
    pub async fn run_all<I, T, F>(
        &self,
        inputs: impl IntoIterator<Item = I>,
        task_fn: F,
    ) -> Vec<TaskResult<I, T>>
    where
        I: Clone + Send + 'static,
        T: Send + 'static,
        F: Fn(I) -> TaskResult<I, T> + Send + Sync + 'static,
    {
        let task_fn = Arc::new(task_fn);
        let mut join_set = JoinSet::new();
        let mut submitted = 0usize;

        for (index, input) in inputs.into_iter().enumerate() {
            submitted += 1;
            let semaphore = Arc::clone(&self.semaphore);
            let task_fn = Arc::clone(&task_fn);
            let in_flight = Arc::clone(&self.in_flight);
            let peak_in_flight = Arc::clone(&self.peak_in_flight);

            join_set.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("semaphore closed unexpectedly");

                // Kept outside the closure so a panicking task body still
                // yields a result for its slot.
                let recovery_input = input.clone();
                let recovery_clock = TaskClock::start();

                let current = in_flight.fetch_add(1, Ordering::Relaxed) + 1;
                update_peak(&peak_in_flight, current);

                let joined = tokio::task::spawn_blocking(move || task_fn(input)).await;

                in_flight.fetch_sub(1, Ordering::Relaxed);

                let result = match joined {
                    Ok(result) => result,
                    Err(join_error) => TaskResult {
                        input: recovery_input,
                        outcome: Err(TaskFailure::Panicked {
                            message: panic_message(join_error),
                        }),
                        timing: recovery_clock.finish(),
                    },
                };
                (index, result)
            });
        }

        debug!(
            submitted,
            worker_count = self.worker_count,
            "Batch submitted, gathering results"
        );

        let mut slots: Vec<Option<TaskResult<I, T>>> =
            (0..submitted).map(|_| None).collect();
        while let Some(joined) = join_set.join_next().await {
            if let Ok((index, result)) = joined {
                slots[index] = Some(result);
            }
        }

        debug!(submitted, "Batch complete");

        slots
            .into_iter()
            .map(|slot| slot.expect("every submitted task reports exactly once"))
            .collect()
    }
}

/// Updates the peak counter if current exceeds it.
fn update_peak(peak: &AtomicUsize, current: usize) {
    let mut observed = peak.load(Ordering::Relaxed);
    while current > observed {
        match peak.compare_exchange_weak(observed, current, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => break,
            Err(p) => observed = p,
        }
    }
}

/// Extracts a readable message from a panicked task's join error.
fn panic_message(join_error: JoinError) -> String {
    match join_error.try_into_panic() {
        Ok(payload) => {
            if let Some(text) = payload.downcast_ref::<&str>() {
                (*text).to_string()
            } else if let Some(text) = payload.downcast_ref::<String>() {
                text.clone()
            } else {
                "task panicked with a non-string payload".to_string()
            }
        }
        Err(join_error) => format!("task did not complete: {join_error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::TaskClock;

    fn plain_result(input: u64, value: u64) -> TaskResult<u64, u64> {
        let clock = TaskClock::start();
        TaskResult {
            input,
            outcome: Ok(value),
            timing: clock.finish(),
        }
    }

    #[test]
    fn test_pool_uses_effective_worker_count() {
        let pool = WorkerPool::new(PoolConfig::with_cap(3));
        assert!(pool.worker_count() <= 3);
        assert!(pool.worker_count() >= 1);
        assert_eq!(pool.in_flight(), 0);
        assert_eq!(pool.peak_in_flight(), 0);
    }

    #[tokio::test]
    async fn test_empty_batch_returns_empty() {
        let pool = WorkerPool::new(PoolConfig::default());
        let results = pool
            .run_all(Vec::<u64>::new(), |x| plain_result(x, x))
            .await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_results_preserve_submission_order() {
        let pool = WorkerPool::new(PoolConfig::with_cap(4));
        let results = pool
            .run_all(0..20u64, |x| {
                // Earlier tasks sleep longer so completion order is reversed.
                std::thread::sleep(std::time::Duration::from_millis(20u64.saturating_sub(x)));
                plain_result(x, x * 10)
            })
            .await;

        assert_eq!(results.len(), 20);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.input, i as u64);
            assert_eq!(*result.outcome.as_ref().unwrap(), (i as u64) * 10);
        }
    }

    #[tokio::test]
    async fn test_panic_captured_as_failure() {
        let pool = WorkerPool::new(PoolConfig::with_cap(2));
        let results = pool
            .run_all(0..4u64, |x| {
                if x == 2 {
                    panic!("boom on {x}");
                }
                plain_result(x, x)
            })
            .await;

        assert_eq!(results.len(), 4);
        assert!(results[0].is_ok());
        assert!(results[1].is_ok());
        assert!(results[3].is_ok());
        match &results[2].outcome {
            Err(TaskFailure::Panicked { message }) => assert!(message.contains("boom")),
            other => panic!("expected panic capture, got {other:?}"),
        }
    }

    #[test]
    fn test_update_peak_monotonic() {
        let peak = AtomicUsize::new(2);
        update_peak(&peak, 5);
        assert_eq!(peak.load(Ordering::Relaxed), 5);
        update_peak(&peak, 3);
        assert_eq!(peak.load(Ordering::Relaxed), 5);
    }
}
