//! Parallel processing utilities for rolling-window analytics.
//!
//! Windows are independent of one another and only read shared immutable
//! inputs, so they can be mapped in any order. Output order always matches
//! input order. Uses rayon when the `parallel` feature is enabled.

use crate::config::RiskConfig;

/// Maps a function over items, conditionally using parallel iteration.
///
/// Uses parallel iteration when:
/// - The `parallel` feature is enabled
/// - `config.parallel` is true
/// - The collection size reaches `config.parallel_threshold`
#[allow(unused_variables)]
pub fn maybe_parallel_map<T, U, F>(items: &[T], config: &RiskConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}

/// Maps a fallible function over items and stops at the first error.
///
/// In parallel mode every item may already be in flight when an error is
/// found; the error returned is the one for the earliest failing item.
///
/// # Errors
///
/// Returns the first error produced by `f`, in item order.
pub fn try_maybe_parallel_map<T, U, E, F>(items: &[T], config: &RiskConfig, f: F) -> Result<Vec<U>, E>
where
    T: Sync,
    U: Send,
    E: Send,
    F: Fn(&T) -> Result<U, E> + Sync + Send,
{
    if config.should_parallelize(items.len()) {
        maybe_parallel_map(items, config, f).into_iter().collect()
    } else {
        items.iter().map(f).collect()
    }
}
