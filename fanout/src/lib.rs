//! Fanout - concurrent batch job runner
//!
//! This library fans out three independent kinds of work over a bounded
//! worker pool: squaring a range of integers, computing word-frequency
//! histograms for text files, and applying an invert-and-blur transform
//! to images. Each batch is executed scatter-gather style and summarized
//! after completion.
//!
//! # High-Level API
//!
//! For most use cases, the [`runner`] module provides a simplified facade:
//!
//! ```ignore
//! use fanout::runner::{BatchRunner, RunnerConfig};
//! use fanout::sink::StdoutSink;
//! use std::sync::Arc;
//!
//! let runner = BatchRunner::new(RunnerConfig::default(), Arc::new(StdoutSink::new()));
//! let report = runner.run(&std::env::current_dir()?).await?;
//! println!("{} tasks failed", report.failed_total());
//! ```

pub mod codec;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod outcome;
pub mod pool;
pub mod report;
pub mod runner;
pub mod sink;
pub mod tasks;
pub mod text;

/// Version of the fanout library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
