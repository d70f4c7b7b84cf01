//! Error types produced while building an effective model.

mod problems;
mod types;

pub use problems::{Problem, Problems, Severity};
pub use types::ModelError;

use std::sync::Arc;

/// Result alias used throughout the crate.
///
/// Errors are shared via [`Arc`] so that a failure recorded against a cached
/// ancestor model can be reported to every sibling build that hits it.
pub type ModelResult<T> = Result<T, Arc<ModelError>>;

#[cfg(test)]
mod tests;
