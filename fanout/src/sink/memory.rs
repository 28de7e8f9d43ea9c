//! In-memory sink implementation.

use super::OutputSink;
use std::sync::Mutex;

/// Sink that captures messages in memory.
///
/// Useful for:
/// - Tests asserting on report content and message contiguity
/// - Silent operation modes where console output is unwanted
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates a new empty memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every message written so far, in write order.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Returns all messages joined with blank-line separators, matching
    /// what [`super::StdoutSink`] would have printed.
    pub fn rendered(&self) -> String {
        self.messages().join("\n")
    }
}

impl OutputSink for MemorySink {
    fn write(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
    }
}
