//! Running independent analyses side by side
//!
//! Each root gets its own [`TreeBuilder`](crate::core::walker::TreeBuilder)
//! through [`analyze_directory`], so runs share no state.

use crate::core::session::{AnalysisOptions, AnalysisOutcome, analyze_directory};
use crate::error::{RepoMapError, Result};
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::debug;

/// Outcome of one root in a batch
#[derive(Debug)]
pub struct PathOutcome {
    pub path: PathBuf,
    pub result: Result<AnalysisOutcome>,
}

/// Execute a function in parallel on a collection of items, keeping order
pub fn parallel_process<T, F, R>(items: Vec<T>, f: F) -> Vec<R>
where
    T: Send,
    R: Send,
    F: Fn(T) -> R + Send + Sync,
{
    items.into_par_iter().map(f).collect()
}

/// Analyze every path, in parallel unless `parallel` is false
///
/// Results come back in input order. A failing root does not affect the
/// others. `jobs` bounds the worker count; `None` uses rayon's default pool.
pub fn analyze_paths(
    paths: &[PathBuf],
    options: &AnalysisOptions,
    parallel: bool,
    jobs: Option<usize>,
) -> Result<Vec<PathOutcome>> {
    let run = |path: PathBuf| {
        let result = analyze_directory(&path, options);
        PathOutcome { path, result }
    };

    if !parallel || paths.len() < 2 {
        return Ok(paths.iter().cloned().map(run).collect());
    }

    debug!(roots = paths.len(), ?jobs, "analyzing roots in parallel");

    match jobs {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| RepoMapError::ParallelExecution {
                    message: format!("failed to build thread pool: {}", e),
                    #[cfg(not(tarpaulin_include))]
                    backtrace: std::backtrace::Backtrace::capture(),
                })?;
            Ok(pool.install(|| parallel_process(paths.to_vec(), run)))
        }
        None => Ok(parallel_process(paths.to_vec(), run)),
    }
}
