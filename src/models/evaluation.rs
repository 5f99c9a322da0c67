//! Evaluation input and result models.

use crate::models::review_event::ReviewEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the evaluator needs to decide mergeability.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationInput {
    /// Review events ordered by `submitted_at` ascending. The caller is
    /// responsible for the ordering; the evaluator rejects violations and
    /// never re-sorts.
    pub events: Vec<ReviewEvent>,

    /// When the reviewed content last changed (UTC). Approvals older than
    /// this no longer certify the current content.
    pub content_pushed_at: DateTime<Utc>,
}

impl EvaluationInput {
    pub fn new(events: Vec<ReviewEvent>, content_pushed_at: DateTime<Utc>) -> Self {
        Self {
            events,
            content_pushed_at,
        }
    }
}

/// Why the evaluator reached its verdict.
///
/// Diagnostics only; callers branch on
/// [`EvaluationResult::approved`], not on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalReason {
    /// No reviews were submitted at all.
    NoReviews,
    /// At least one reviewer's standing verdict requests changes.
    ChangesRequestedPending,
    /// Every approval predates the last content push.
    StaleApproval,
    /// Approved by at least one reviewer after the last content push.
    Approved,
    /// Reviews exist but none of them is decisive.
    NotApproved,
}

impl std::fmt::Display for ApprovalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoReviews => write!(f, "no_reviews"),
            Self::ChangesRequestedPending => write!(f, "changes_requested_pending"),
            Self::StaleApproval => write!(f, "stale_approval"),
            Self::Approved => write!(f, "approved"),
            Self::NotApproved => write!(f, "not_approved"),
        }
    }
}

/// The evaluator's verdict plus its rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// Whether the request is approved and mergeable.
    pub approved: bool,

    /// Why.
    pub reason: ApprovalReason,

    /// Logins whose standing verdict is approval, sorted.
    pub approved_by: Vec<String>,

    /// Logins with an outstanding request for changes, sorted.
    pub changes_requested_by: Vec<String>,
}

impl EvaluationResult {
    /// A negative result with no reviewer rationale.
    pub fn rejected(reason: ApprovalReason) -> Self {
        Self {
            approved: false,
            reason,
            approved_by: Vec::new(),
            changes_requested_by: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_display() {
        assert_eq!(ApprovalReason::NoReviews.to_string(), "no_reviews");
        assert_eq!(
            ApprovalReason::ChangesRequestedPending.to_string(),
            "changes_requested_pending"
        );
        assert_eq!(ApprovalReason::StaleApproval.to_string(), "stale_approval");
    }

    #[test]
    fn test_result_serialization() {
        let result = EvaluationResult {
            approved: true,
            reason: ApprovalReason::Approved,
            approved_by: vec!["alice".to_string()],
            changes_requested_by: Vec::new(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"approved\":true"));
        assert!(json.contains("\"reason\":\"approved\""));
        assert!(json.contains("\"approvedBy\":[\"alice\"]"));
    }

    #[test]
    fn test_rejected_helper() {
        let result = EvaluationResult::rejected(ApprovalReason::NoReviews);
        assert!(!result.approved);
        assert_eq!(result.reason, ApprovalReason::NoReviews);
        assert!(result.approved_by.is_empty());
    }
}
