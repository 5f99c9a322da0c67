//! Data models for review evaluation.
//!
//! These models represent the review history supplied by the caller and the
//! decision derived from it. All models derive Serialize so results can be
//! passed across an IPC or HTTP boundary by embedding applications.

pub mod evaluation;
pub mod review_event;
pub mod reviewer_decision;

// Re-exports for convenient access
pub use evaluation::{ApprovalReason, EvaluationInput, EvaluationResult};
pub use review_event::{ReviewEvent, ReviewState};
pub use reviewer_decision::ReviewerDecision;
