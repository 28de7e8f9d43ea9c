//! Worker pool configuration.

/// Default cap on concurrent workers per pool.
pub const DEFAULT_WORKER_CAP: usize = 5;

/// Fallback CPU count when detection fails.
pub const FALLBACK_CPU_COUNT: usize = 4;

/// Configuration for a [`super::WorkerPool`].
///
/// The effective worker count is `min(max_workers, host_parallelism)`,
/// at least 1, and is fixed for the pool's lifetime. There is no dynamic
/// resizing or work stealing.
#[derive(Debug, Clone, Copy)]
pub struct PoolConfig {
    /// Upper bound on concurrently executing task bodies.
    pub max_workers: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_workers: DEFAULT_WORKER_CAP,
        }
    }
}

impl PoolConfig {
    /// Creates a configuration with an explicit worker cap.
    pub fn with_cap(max_workers: usize) -> Self {
        Self { max_workers }
    }

    /// Computes the effective worker count for this host.
    ///
    /// Formula: `min(max_workers, available_parallelism)`, never below 1.
    pub fn effective_workers(&self) -> usize {
        let cpus = std::thread::available_parallelism()
            .map(|p| p.get())
            .unwrap_or(FALLBACK_CPU_COUNT);
        self.max_workers.min(cpus).max(1)
    }
}
