//! Text-frequency task adapter.

use super::{failure_message, success_message};
use crate::error::TaskFailure;
use crate::outcome::{TaskClock, TaskResult};
use crate::sink::OutputSink;
use crate::text::{word_frequency, WordFrequency};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// Task that builds the word-frequency histogram for one text file.
///
/// Wraps the tokenizer collaborator; open, read, and UTF-8 decode errors
/// become [`TaskFailure::Io`] and any partial histogram is discarded.
/// The status message never echoes file content.
pub struct TextFrequencyTask {
    /// Serialized destination for the status message
    sink: Arc<dyn OutputSink>,
}

impl TextFrequencyTask {
    /// Creates a new text-frequency task adapter.
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }

    /// Tokenizes `path`, reports status, and returns the result.
    pub fn run(&self, path: PathBuf) -> TaskResult<PathBuf, WordFrequency> {
        let clock = TaskClock::start();
        let outcome = word_frequency(&path).map_err(|source| TaskFailure::Io {
            path: path.clone(),
            source,
        });
        let timing = clock.finish();

        let activity = format!("Processing file '{}'", path.display());
        let message = match &outcome {
            Ok(_) => success_message(&activity, &timing, &["File processed".to_string()]),
            Err(failure) => {
                warn!(path = %path.display(), %failure, "Text task failed");
                failure_message(&activity, &timing, &failure.to_string())
            }
        };
        self.sink.write(&message);

        TaskResult {
            input: path,
            outcome,
            timing,
        }
    }
}
