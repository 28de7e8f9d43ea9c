//! Fanout CLI - batch job runner entry point
//!
//! Runs the three batches (numbers, text files, images) over the current
//! working directory and prints the per-task status messages and batch
//! summaries to standard output.

mod error;

use clap::Parser;
use error::CliError;
use fanout::logging::init_logging;
use fanout::runner::{BatchRunner, RunnerConfig};
use fanout::sink::StdoutSink;
use std::sync::Arc;
use tracing::info;

/// Directory for the session log file.
const LOG_DIR: &str = "logs";

/// Session log filename.
const LOG_FILE: &str = "fanout.log";

#[derive(Parser)]
#[command(name = "fanout")]
#[command(about = "Run square, word-frequency, and image-transform batches over the current directory", long_about = None)]
struct Args {
    /// Cap on concurrent workers per batch (effective count is
    /// min(cap, host parallelism))
    #[arg(long, default_value_t = fanout::pool::DEFAULT_WORKER_CAP)]
    workers: usize,

    /// Enable debug-level logging in the log file
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Logging goes to a file only; stdout belongs to the report sink.
    let _logging_guard = match init_logging(LOG_DIR, LOG_FILE, args.debug) {
        Ok(guard) => guard,
        Err(e) => CliError::LoggingInit(e.to_string()).exit(),
    };

    info!("fanout v{}", fanout::VERSION);

    let work_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => CliError::WorkingDir(e).exit(),
    };

    let config = RunnerConfig {
        worker_cap: args.workers.max(1),
        ..RunnerConfig::default()
    };
    let runner = BatchRunner::new(config, Arc::new(StdoutSink::new()));

    match runner.run(&work_dir).await {
        Ok(report) => {
            info!(
                numbers = report.numbers_processed,
                text_files = report.text_processed,
                images = report.images_processed,
                failed = report.failed_total(),
                "Run finished"
            );
        }
        Err(e) => CliError::Run(e).exit(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_worker_cap() {
        let args = Args::parse_from(["fanout"]);
        assert_eq!(args.workers, fanout::pool::DEFAULT_WORKER_CAP);
        assert!(!args.debug);
    }

    #[test]
    fn test_workers_flag_overrides_cap() {
        let args = Args::parse_from(["fanout", "--workers", "2", "--debug"]);
        assert_eq!(args.workers, 2);
        assert!(args.debug);
    }

    #[test]
    fn test_positional_arguments_are_rejected() {
        assert!(Args::try_parse_from(["fanout", "some-dir"]).is_err());
    }
}
