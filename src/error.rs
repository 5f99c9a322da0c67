//! Crate error types.
//!
//! These errors are serializable so callers embedding the evaluator in a
//! service can return them across an API boundary unchanged.

use serde::Serialize;
use thiserror::Error;

/// Errors returned by the evaluator.
///
/// Negative outcomes (no reviews, pending rejections, stale approvals) are
/// not errors; they are reported through
/// [`EvaluationResult`](crate::models::EvaluationResult). Errors here mean
/// the caller violated the input contract.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum EvaluationError {
    /// The event sequence is not ordered by submission time.
    #[error("review events out of order at index {index}: {message}")]
    OutOfOrderEvents {
        message: String,
        /// Index of the first event that precedes its predecessor.
        index: usize,
    },
}

impl EvaluationError {
    /// Create an out-of-order error for the event at `index`.
    pub fn out_of_order(message: impl Into<String>, index: usize) -> Self {
        Self::OutOfOrderEvents {
            message: message.into(),
            index,
        }
    }
}
