//! Bounded-concurrency scatter-gather execution.
//!
//! [`WorkerPool`] runs a batch of homogeneous task closures with a fixed
//! maximum parallelism and returns their results in submission order.
//! Batches are gathered whole: the caller blocks until every task has
//! completed, successfully or not.
//!
//! # Example
//!
//! ```ignore
//! use fanout::pool::{PoolConfig, WorkerPool};
//!
//! let pool = WorkerPool::new(PoolConfig::default());
//! let results = pool.run_all(1..=10u64, |x| square.run(x)).await;
//! assert_eq!(results.len(), 10);
//! ```

mod config;
mod worker_pool;

pub use config::{PoolConfig, DEFAULT_WORKER_CAP, FALLBACK_CPU_COUNT};
pub use worker_pool::WorkerPool;
