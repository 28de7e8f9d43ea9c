//! Failure taxonomy for batch tasks.
//!
//! Every task returns a typed outcome instead of raising a fault across the
//! pool boundary. The variants here are the complete set of ways a task can
//! fail; the pool itself never fails because of a task.

use std::path::PathBuf;
use thiserror::Error;

/// A failure produced by a single task.
///
/// Failures carry a human-readable diagnostic plus the original cause where
/// one exists. They are reported inline per task with the same timing and
/// format conventions as successes, and again in the end-of-batch summary.
#[derive(Debug, Error)]
pub enum TaskFailure {
    /// Open, read, or decode error on a text file.
    #[error("I/O failure on '{}': {source}", path.display())]
    Io {
        /// Path of the file that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Corrupt or unverifiable image, detected before transformation.
    #[error("cannot decode image '{}': {message}", path.display())]
    Decode {
        /// Path of the image that failed verification
        path: PathBuf,
        /// Diagnostic from the codec
        message: String,
    },

    /// Image pipeline error after verification, including encode/write errors.
    #[error("image pipeline failed for '{}': {message}", path.display())]
    Image {
        /// Path of the source image
        path: PathBuf,
        /// Diagnostic from the codec
        message: String,
    },

    /// Numeric overflow in the square task.
    ///
    /// Not expected for the bounded input range; signaled explicitly rather
    /// than silently wrapping.
    #[error("squaring {value} overflows")]
    Overflow {
        /// The input whose square does not fit
        value: u64,
    },

    /// The task body panicked.
    ///
    /// Captured at the pool boundary so a fault in one task never aborts
    /// sibling tasks or the batch.
    #[error("task panicked: {message}")]
    Panicked {
        /// Panic payload, when it was a string
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_io_failure_names_path() {
        let failure = TaskFailure::Io {
            path: Path::new("notes.txt").to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let text = failure.to_string();
        assert!(text.contains("notes.txt"));
        assert!(text.contains("no such file"));
    }

    #[test]
    fn test_overflow_names_value() {
        let failure = TaskFailure::Overflow { value: u64::MAX };
        assert!(failure.to_string().contains(&u64::MAX.to_string()));
    }

    #[test]
    fn test_io_failure_exposes_source() {
        use std::error::Error;
        let failure = TaskFailure::Io {
            path: Path::new("a.txt").to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(failure.source().is_some());
    }
}
