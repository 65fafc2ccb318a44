//! Execution engines for controlling computation strategy
//!
//! An engine decides whether a batch of independent tasks (such as
//! bootstrap resamples) runs in the current thread or on a Rayon pool.
//! Every task writes only its own output slot; results are returned in
//! task order.

use crate::Result;

/// Execution strategy for batch operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Process items sequentially
    Sequential,
    /// Process items in parallel
    Parallel,
}

/// Marker trait for execution engine mode properties
pub trait ExecutionMode {
    /// Whether this engine executes tasks sequentially, in order
    const IS_SEQUENTIAL: bool;
}

/// Trait for execution engines
pub trait ExecutionEngine: Clone + Send + Sync + ExecutionMode {
    /// Execute a function in the engine's execution context
    fn execute<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send;

    /// Run `count` independent tasks, stopping at the first error
    fn try_execute_batch<F, R>(&self, count: usize, f: F) -> Result<Vec<R>>
    where
        F: Fn(usize) -> Result<R> + Sync + Send,
        R: Send;

    /// Get the execution strategy
    fn strategy(&self) -> ExecutionStrategy;

    /// Check if parallel execution is used
    fn is_parallel(&self) -> bool {
        self.strategy() == ExecutionStrategy::Parallel
    }

    /// Get the number of threads available
    fn num_threads(&self) -> usize;
}

/// Sequential execution engine
///
/// Executes all operations in the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialEngine;

impl SequentialEngine {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutionMode for SequentialEngine {
    const IS_SEQUENTIAL: bool = true;
}

impl ExecutionEngine for SequentialEngine {
    fn execute<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        f()
    }

    fn try_execute_batch<F, R>(&self, count: usize, f: F) -> Result<Vec<R>>
    where
        F: Fn(usize) -> Result<R> + Sync + Send,
        R: Send,
    {
        (0..count).map(f).collect()
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Sequential
    }

    fn num_threads(&self) -> usize {
        1
    }
}

/// Parallel execution engine using Rayon
#[cfg(feature = "parallel")]
#[derive(Clone, Debug, Default)]
pub struct ParallelEngine {
    thread_pool: Option<std::sync::Arc<rayon::ThreadPool>>,
}

#[cfg(feature = "parallel")]
impl ParallelEngine {
    /// Create a new parallel engine on the global Rayon pool
    pub fn new() -> Self {
        Self { thread_pool: None }
    }

    /// Create a new parallel engine with a custom thread pool
    pub fn with_thread_pool(pool: std::sync::Arc<rayon::ThreadPool>) -> Self {
        Self {
            thread_pool: Some(pool),
        }
    }

    /// Create with a specific number of threads
    pub fn with_num_threads(num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| crate::Error::Execution(format!("Failed to create thread pool: {e}")))?;

        Ok(Self {
            thread_pool: Some(std::sync::Arc::new(pool)),
        })
    }
}

#[cfg(feature = "parallel")]
impl ExecutionMode for ParallelEngine {
    const IS_SEQUENTIAL: bool = false;
}

#[cfg(feature = "parallel")]
impl ExecutionEngine for ParallelEngine {
    fn execute<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.thread_pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }

    fn try_execute_batch<F, R>(&self, count: usize, f: F) -> Result<Vec<R>>
    where
        F: Fn(usize) -> Result<R> + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        self.execute(|| (0..count).into_par_iter().map(f).collect())
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Parallel
    }

    fn num_threads(&self) -> usize {
        match &self.thread_pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }
}

/// Create a sequential engine
pub fn sequential() -> SequentialEngine {
    SequentialEngine::new()
}
