//! Square task adapter.

use super::{failure_message, success_message};
use crate::error::TaskFailure;
use crate::outcome::{TaskClock, TaskResult};
use crate::sink::OutputSink;
use std::sync::Arc;
use tracing::warn;

/// Task that squares one integer.
///
/// The only failure mode is numeric overflow, which the bounded input
/// range (1..100) cannot reach; it is still signaled as
/// [`TaskFailure::Overflow`] rather than silently wrapping.
pub struct SquareTask {
    /// Serialized destination for the status message
    sink: Arc<dyn OutputSink>,
}

impl SquareTask {
    /// Creates a new square task adapter.
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }

    /// Squares `x`, reports status, and returns the result.
    pub fn run(&self, x: u64) -> TaskResult<u64, u64> {
        let clock = TaskClock::start();
        let outcome = x.checked_mul(x).ok_or(TaskFailure::Overflow { value: x });
        let timing = clock.finish();

        let activity = format!("Squaring {x}");
        let message = match &outcome {
            Ok(result) => {
                success_message(&activity, &timing, &[format!("Result: {result}")])
            }
            Err(failure) => {
                warn!(input = x, %failure, "Square task failed");
                failure_message(&activity, &timing, &failure.to_string())
            }
        };
        self.sink.write(&message);

        TaskResult {
            input: x,
            outcome,
            timing,
        }
    }
}
