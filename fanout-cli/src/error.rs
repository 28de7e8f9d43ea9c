//! CLI error handling with user-friendly messages.

use fanout::runner::RunnerError;
use std::fmt;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Failed to resolve the working directory
    WorkingDir(std::io::Error),
    /// The run could not start
    Run(RunnerError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::WorkingDir(e) => write!(f, "Cannot resolve working directory: {}", e),
            CliError::Run(e) => write!(f, "{}", e),
        }
    }
}
