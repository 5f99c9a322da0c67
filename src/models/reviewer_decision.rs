//! Per-reviewer folded decision record.

use crate::models::review_event::ReviewState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single latest decisive verdict for one reviewer, folded from their
/// entire event history.
///
/// Computed fresh on every evaluation; never persisted or shared between
/// calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewerDecision {
    /// Reviewer login.
    pub reviewer: String,

    /// Most recent `Approved` or `ChangesRequested` state, if the reviewer
    /// ever submitted one. Non-decisive events never land here.
    pub latest_decisive_state: Option<ReviewState>,

    /// When the most recent `Approved` state was given. Meaningful only
    /// while `latest_decisive_state` is `Approved`.
    pub latest_approval_time: Option<DateTime<Utc>>,
}

impl ReviewerDecision {
    pub fn new(reviewer: impl Into<String>) -> Self {
        Self {
            reviewer: reviewer.into(),
            latest_decisive_state: None,
            latest_approval_time: None,
        }
    }

    /// Fold one event into this decision.
    ///
    /// Decisive states overwrite the stored verdict; `Other` is transparent
    /// and leaves the record untouched.
    pub fn observe(&mut self, state: ReviewState, submitted_at: DateTime<Utc>) {
        if !state.is_decisive() {
            return;
        }
        self.latest_decisive_state = Some(state);
        if state == ReviewState::Approved {
            self.latest_approval_time = Some(submitted_at);
        }
    }

    /// Whether this reviewer's standing verdict is approval.
    pub fn is_approving(&self) -> bool {
        self.latest_decisive_state == Some(ReviewState::Approved)
    }

    /// Whether this reviewer has an outstanding request for changes.
    pub fn is_requesting_changes(&self) -> bool {
        self.latest_decisive_state == Some(ReviewState::ChangesRequested)
    }
}
