//! Task outcome and timing types.
//!
//! Every task returns a [`TaskResult`]: the input it was given, a typed
//! success-or-failure outcome, and wall-clock timing. Results are immutable
//! once produced and are owned by the reporter after the pool hands back
//! the batch.

use crate::error::TaskFailure;
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// Timing metadata for one task execution.
///
/// Wall-clock timestamps come from `chrono` for human-readable reporting;
/// the elapsed duration is measured with a monotonic [`Instant`] so it is
/// unaffected by clock adjustments.
#[derive(Debug, Clone)]
pub struct TaskTiming {
    /// When the task body started
    pub started_at: DateTime<Local>,
    /// When the task body finished
    pub finished_at: DateTime<Local>,
    /// Monotonic elapsed time between start and finish
    pub elapsed: Duration,
}

impl TaskTiming {
    /// Elapsed time in fractional seconds, for display at fixed precision.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Stopwatch that produces a [`TaskTiming`].
///
/// Adapters start the clock before invoking their collaborator and finish
/// it immediately after, whether the collaborator succeeded or failed.
#[derive(Debug)]
pub struct TaskClock {
    started_at: DateTime<Local>,
    start_instant: Instant,
}

impl TaskClock {
    /// Starts the clock now.
    pub fn start() -> Self {
        Self {
            started_at: Local::now(),
            start_instant: Instant::now(),
        }
    }

    /// Stops the clock and returns the completed timing.
    pub fn finish(self) -> TaskTiming {
        TaskTiming {
            started_at: self.started_at,
            finished_at: Local::now(),
            elapsed: self.start_instant.elapsed(),
        }
    }
}

/// The outcome of a single task: input, tagged result, and timing.
///
/// `I` is the task's input type (an integer, a file path); `T` is the
/// success value type. Failures are full [`TaskFailure`] values, never
/// bare strings, so the reporter gets structured data instead of parsed
/// text.
#[derive(Debug)]
pub struct TaskResult<I, T> {
    /// The input this task was constructed with
    pub input: I,
    /// Success value or typed failure
    pub outcome: Result<T, TaskFailure>,
    /// Wall-clock and monotonic timing for the task body
    pub timing: TaskTiming,
}

impl<I, T> TaskResult<I, T> {
    /// Returns true when the task succeeded.
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}
