//! Review Gate - approval evaluation for pull requests.
//!
//! Given the ordered review history of a pull request and the timestamp of
//! the last content push, this crate decides whether the request is approved
//! and mergeable. It performs no I/O: callers fetch the review events from
//! their hosting API, map the API's review-state vocabulary onto
//! [`ReviewState`], and act on the returned [`EvaluationResult`].

pub mod error;
pub mod models;
pub mod services;

pub use error::EvaluationError;
pub use models::{
    ApprovalReason, EvaluationInput, EvaluationResult, ReviewEvent, ReviewState, ReviewerDecision,
};
pub use services::evaluator::evaluate;
