use rayon::prelude::*;
use thiserror::Error;

use fastgauss_image::ImageError;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),
}

impl From<ParallelError> for ImageError {
    fn from(err: ParallelError) -> Self {
        ImageError::ParallelExecution(err.to_string())
    }
}

/// Controls how the independent channel planes are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool, one task per channel plane.
    #[default]
    Parallel,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the caller already runs
    /// inside a thread pool.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

/// Map every item through `f` and collect the results in input order.
///
/// All items are processed before this returns, so the caller sees a join
/// barrier regardless of the strategy. The first error produced by `f` is
/// returned.
///
/// # Arguments
///
/// * `items` - The items to process, usually one channel plane each.
/// * `strategy` - How to dispatch the work.
/// * `f` - The operation applied to each item.
pub fn par_map_channels<T, U, F>(
    items: &[T],
    strategy: ExecutionStrategy,
    f: F,
) -> Result<Vec<U>, ImageError>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> Result<U, ImageError> + Sync + Send,
{
    match strategy {
        ExecutionStrategy::Serial => items.iter().map(f).collect(),
        ExecutionStrategy::Parallel => items.par_iter().map(f).collect(),
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n).into());
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| items.par_iter().map(f).collect())
        }
    }
}
