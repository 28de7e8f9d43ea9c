//! End-of-batch aggregation and summary rendering.
//!
//! The reporter consumes each batch's ordered results after the pool has
//! gathered them and renders one human-readable summary to the sink.
//! Failures appear in the same summary as successes, never on a side
//! channel. The image batch has no aggregate summary beyond the per-task
//! status messages, so the reporter has no method for it.

use crate::outcome::TaskResult;
use crate::sink::OutputSink;
use crate::text::WordFrequency;
use std::path::PathBuf;
use std::sync::Arc;

/// Renders batch summaries to the sink.
pub struct Reporter {
    sink: Arc<dyn OutputSink>,
}

impl Reporter {
    /// Creates a reporter writing to the given sink.
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }

    /// Prints the numeric batch's full ordered result sequence as one
    /// collection.
    pub fn numeric_summary(&self, results: &[TaskResult<u64, u64>]) {
        let rendered: Vec<String> = results
            .iter()
            .map(|result| match &result.outcome {
                Ok(value) => value.to_string(),
                Err(_) => "<failed>".to_string(),
            })
            .collect();

        self.sink
            .write(&format!("Squares:\n[{}]", rendered.join(", ")));
    }

    /// Prints the per-file word frequencies in submission order.
    ///
    /// Successful empty files are reported as empty, not as errors; failed
    /// files get a "not processed" notice naming the file.
    pub fn text_summary(&self, results: &[TaskResult<PathBuf, WordFrequency>]) {
        let mut summary = String::from("Word frequencies per file:");

        for result in results {
            summary.push_str("\n\nFile: ");
            summary.push_str(&result.input.display().to_string());

            match &result.outcome {
                Ok(frequency) if frequency.is_empty() => {
                    summary.push_str("\nFile is empty");
                }
                Ok(frequency) => {
                    for (word, count) in frequency.iter() {
                        summary.push_str(&format!("\n{word}: {count}"));
                    }
                }
                Err(_) => {
                    summary.push_str("\nNot processed due to errors");
                }
            }
        }

        self.sink.write(&summary);
    }
}
