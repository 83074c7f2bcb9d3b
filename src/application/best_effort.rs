//! Best-effort platform calls
//!
//! Platform failures inside the core (a surface that refuses to show, a
//! clipboard that is momentarily locked) are never propagated. They are
//! logged here and turned into `None`, and the next natural trigger retries.

use std::fmt::Display;

/// Run the outcome of a platform call through the swallow-and-log policy.
///
/// Returns the success value, or `None` after logging the failure at warn
/// level with `operation` as context.
pub fn best_effort<T, E: Display>(operation: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{} failed: {}", operation, e);
            None
        }
    }
}

/// Like [`best_effort`], but for calls expected to fail routinely
/// (e.g. reading an empty clipboard); logs at debug level.
pub fn best_effort_quiet<T, E: Display>(operation: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("{} failed: {}", operation, e);
            None
        }
    }
}
