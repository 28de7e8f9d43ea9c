//! Task adapters wrapping the external collaborators.
//!
//! Every adapter follows the same template: start a [`TaskClock`], invoke
//! its collaborator inside the failure boundary, stop the clock, assemble
//! one multi-line status message, write it to the sink exactly once
//! (success or failure), and return a [`TaskResult`] to the pool.
//!
//! The status message carries the task identity, start and end wall-clock
//! times, the elapsed duration at fixed precision, and either a result
//! summary or the failure diagnostic.

mod image_transform;
mod square;
mod word_count;

pub use image_transform::ImageTransformTask;
pub use square::SquareTask;
pub use word_count::TextFrequencyTask;

use crate::outcome::TaskTiming;
use chrono::{DateTime, Local};

/// Wall-clock format used in status messages: `HH:MM:SS.ffffff`.
fn wall_clock(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%H:%M:%S%.6f").to_string()
}

/// Assembles the status message for a completed task.
///
/// `detail_lines` carry the per-task result summary (numeric result,
/// output path, and so on); each is indented under the timing lines.
fn success_message(activity: &str, timing: &TaskTiming, detail_lines: &[String]) -> String {
    let mut message = format!(
        "➤ [START] {activity} started at {}\n\
         ✔ [END] {activity} finished at {}\n   \
         Elapsed: {:.6} s",
        wall_clock(&timing.started_at),
        wall_clock(&timing.finished_at),
        timing.elapsed_secs(),
    );
    for line in detail_lines {
        message.push_str("\n   ");
        message.push_str(line);
    }
    message
}

/// Assembles the status message for a failed task.
///
/// Failures use the same timing conventions as successes, with the
/// diagnostic text in place of the result summary.
fn failure_message(activity: &str, timing: &TaskTiming, diagnostic: &str) -> String {
    format!(
        "✖ [ERROR] {activity} failed\n   \
         Started at {}, finished at {}\n   \
         Elapsed: {:.6} s\n   \
         Error: {diagnostic}",
        wall_clock(&timing.started_at),
        wall_clock(&timing.finished_at),
        timing.elapsed_secs(),
    )
}
