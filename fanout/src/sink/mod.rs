//! Output serialization for concurrent tasks.
//!
//! Many tasks report status concurrently; the sink is the single
//! serialization point that guarantees a fully-assembled multi-line
//! message is never interleaved with another task's message.
//!
//! # Thread Safety
//!
//! Implementations must be `Send + Sync`. The serialization primitive
//! guards only the write of one message, never any task computation, so
//! unrelated work is not accidentally serialized behind it.

mod memory;
mod stdout;

pub use memory::MemorySink;
pub use stdout::StdoutSink;

/// A serialized destination for task status messages.
///
/// # Contract
///
/// One call's message appears contiguously in the output, with no
/// interleaving from concurrent calls. Relative order between two calls
/// is unspecified unless the caller serializes them externally.
pub trait OutputSink: Send + Sync {
    /// Writes one fully-assembled message, followed by a blank line.
    ///
    /// Callers must assemble the complete message before calling; partial
    /// messages written across multiple calls lose the contiguity
    /// guarantee.
    fn write(&self, message: &str);
}
