//! Batch runner facade.
//!
//! [`BatchRunner`] is the driver: it discovers the input batches in the
//! working directory and runs them strictly sequentially - numbers, then
//! text files, then images - each on its own fresh [`WorkerPool`]. The
//! strict batch order keeps console output deterministic; only tasks
//! within one batch run concurrently.

use crate::discovery::{discover, DiscoveredFiles};
use crate::pool::{PoolConfig, WorkerPool, DEFAULT_WORKER_CAP};
use crate::report::Reporter;
use crate::sink::OutputSink;
use crate::tasks::{ImageTransformTask, SquareTask, TextFrequencyTask};
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Numeric batch input range.
pub const NUMERIC_RANGE: Range<u64> = 1..100;

/// Errors that prevent a run from starting.
///
/// Individual task failures never surface here; they are reported inside
/// the batch summaries.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The working directory could not be listed.
    #[error("failed to scan working directory '{}': {source}", dir.display())]
    Discovery {
        /// The directory that failed to list
        dir: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Configuration for a [`BatchRunner`].
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Cap on concurrent workers per pool; the effective count is
    /// `min(worker_cap, host_parallelism)`.
    pub worker_cap: usize,
    /// Inputs for the numeric batch.
    pub numeric_range: Range<u64>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            worker_cap: DEFAULT_WORKER_CAP,
            numeric_range: NUMERIC_RANGE,
        }
    }
}

/// Per-batch counts for one completed run.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunReport {
    /// Successful numeric tasks
    pub numbers_processed: usize,
    /// Failed numeric tasks
    pub numbers_failed: usize,
    /// Successfully tokenized text files
    pub text_processed: usize,
    /// Text files that failed
    pub text_failed: usize,
    /// Successfully transformed images
    pub images_processed: usize,
    /// Images that failed
    pub images_failed: usize,
}

impl RunReport {
    /// Total failed tasks across all batches.
    pub fn failed_total(&self) -> usize {
        self.numbers_failed + self.text_failed + self.images_failed
    }
}

/// Drives one full run over a working directory.
pub struct BatchRunner {
    config: RunnerConfig,
    sink: Arc<dyn OutputSink>,
}

impl BatchRunner {
    /// Creates a runner with the given configuration and sink.
    pub fn new(config: RunnerConfig, sink: Arc<dyn OutputSink>) -> Self {
        Self { config, sink }
    }

    /// Runs all three batches over `work_dir`.
    ///
    /// When the directory holds neither text files nor images, a
    /// "Nothing to process." notice is written and the run ends
    /// successfully without executing any batch.
    pub async fn run(&self, work_dir: &Path) -> Result<RunReport, RunnerError> {
        let found = discover(work_dir).map_err(|source| RunnerError::Discovery {
            dir: work_dir.to_path_buf(),
            source,
        })?;

        if found.is_empty() {
            info!(dir = %work_dir.display(), "No files to process");
            self.sink.write("Nothing to process.");
            return Ok(RunReport::default());
        }

        let mut report = RunReport::default();
        self.run_numeric_batch(&mut report).await;
        self.run_text_batch(&found, &mut report).await;
        self.run_image_batch(&found, &mut report).await;

        info!(
            failed_total = report.failed_total(),
            "All batches complete"
        );
        Ok(report)
    }

    /// Squares the configured numeric range and prints the collected results.
    async fn run_numeric_batch(&self, report: &mut RunReport) {
        self.sink.write("=== Processing numbers ===");
        info!(
            from = self.config.numeric_range.start,
            to = self.config.numeric_range.end,
            "Starting numeric batch"
        );

        let pool = WorkerPool::new(PoolConfig::with_cap(self.config.worker_cap));
        let square = Arc::new(SquareTask::new(Arc::clone(&self.sink)));
        let results = pool
            .run_all(self.config.numeric_range.clone(), move |x| square.run(x))
            .await;

        report.numbers_processed = results.iter().filter(|r| r.is_ok()).count();
        report.numbers_failed = results.len() - report.numbers_processed;

        Reporter::new(Arc::clone(&self.sink)).numeric_summary(&results);
    }

    /// Tokenizes every discovered text file and prints the frequency summary.
    async fn run_text_batch(&self, found: &DiscoveredFiles, report: &mut RunReport) {
        if found.text_files.is_empty() {
            return;
        }

        self.sink.write("=== Processing text files ===");
        info!(count = found.text_files.len(), "Starting text batch");

        let pool = WorkerPool::new(PoolConfig::with_cap(self.config.worker_cap));
        let text = Arc::new(TextFrequencyTask::new(Arc::clone(&self.sink)));
        let results = pool
            .run_all(found.text_files.clone(), move |path| text.run(path))
            .await;

        report.text_processed = results.iter().filter(|r| r.is_ok()).count();
        report.text_failed = results.len() - report.text_processed;

        Reporter::new(Arc::clone(&self.sink)).text_summary(&results);
    }

    /// Transforms every discovered image.
    ///
    /// The per-task status messages are the whole report for this batch;
    /// the runner only waits for completion before returning.
    async fn run_image_batch(&self, found: &DiscoveredFiles, report: &mut RunReport) {
        if found.image_files.is_empty() {
            return;
        }

        self.sink.write("=== Processing images ===");
        info!(count = found.image_files.len(), "Starting image batch");

        let pool = WorkerPool::new(PoolConfig::with_cap(self.config.worker_cap));
        let transform = Arc::new(ImageTransformTask::new(Arc::clone(&self.sink)));
        let results = pool
            .run_all(found.image_files.clone(), move |path| transform.run(path))
            .await;

        report.images_processed = results.iter().filter(|r| r.is_ok()).count();
        report.images_failed = results.len() - report.images_processed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_empty_directory_reports_nothing_to_process() {
        let dir = TempDir::new().expect("tempdir");
        let sink = Arc::new(MemorySink::new());
        let runner = BatchRunner::new(RunnerConfig::default(), sink.clone());

        let report = runner.run(dir.path()).await.expect("run");
        assert_eq!(report.failed_total(), 0);
        assert_eq!(report.numbers_processed, 0);
        assert_eq!(sink.messages(), vec!["Nothing to process."]);
    }

    #[tokio::test]
    async fn test_missing_directory_is_runner_error() {
        let dir = TempDir::new().expect("tempdir");
        let sink = Arc::new(MemorySink::new());
        let runner = BatchRunner::new(RunnerConfig::default(), sink);

        let result = runner.run(&dir.path().join("gone")).await;
        assert!(matches!(result, Err(RunnerError::Discovery { .. })));
    }

    #[test]
    fn test_default_config_matches_constants() {
        let config = RunnerConfig::default();
        assert_eq!(config.worker_cap, DEFAULT_WORKER_CAP);
        assert_eq!(config.numeric_range, NUMERIC_RANGE);
    }
}
