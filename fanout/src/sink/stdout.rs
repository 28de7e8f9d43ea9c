//! Standard-output sink implementation.

use super::OutputSink;
use std::io::Write;
use std::sync::Mutex;

/// Sink that writes messages to standard output.
///
/// A single mutex guards each write so concurrent writers never interleave
/// within a message. The lock is held only for the duration of the write
/// itself.
#[derive(Debug, Default)]
pub struct StdoutSink {
    gate: Mutex<()>,
}

impl StdoutSink {
    /// Creates a new stdout sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for StdoutSink {
    fn write(&self, message: &str) {
        let _guard = self.gate.lock().unwrap_or_else(|poisoned| {
            // A writer panicking mid-write cannot corrupt future messages,
            // so a poisoned gate is still usable.
            poisoned.into_inner()
        });
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        // Console write errors (closed pipe) are not actionable here.
        let _ = writeln!(handle, "{message}");
        let _ = handle.flush();
    }
}
