//! Review event model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a single submitted review.
///
/// `Approved` and `ChangesRequested` are decisive; `Other` covers the
/// non-binding states a hosting API may deliver (comment-only, dismissed,
/// pending) which never count toward the approval decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewState {
    Approved,
    ChangesRequested,
    Other,
}

impl From<&str> for ReviewState {
    fn from(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "APPROVED" => Self::Approved,
            "CHANGES_REQUESTED" => Self::ChangesRequested,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for ReviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approved => write!(f, "approved"),
            Self::ChangesRequested => write!(f, "changes_requested"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl ReviewState {
    /// Whether this state counts toward the approval decision.
    pub fn is_decisive(&self) -> bool {
        matches!(self, Self::Approved | Self::ChangesRequested)
    }
}

/// One review submitted by one reviewer at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEvent {
    /// Stable reviewer login. Identity comparisons use this value, never a
    /// display name.
    pub reviewer: String,

    /// Outcome of the review.
    pub state: ReviewState,

    /// When the reviewer submitted this review (UTC).
    pub submitted_at: DateTime<Utc>,
}

impl ReviewEvent {
    pub fn new(
        reviewer: impl Into<String>,
        state: ReviewState,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            reviewer: reviewer.into(),
            state,
            submitted_at,
        }
    }
}
