//! Approval evaluation service.
//!
//! Folds a chronological review history into one standing verdict per
//! reviewer, then decides mergeability: any outstanding request for changes
//! blocks, and an approval only counts if someone approved after the last
//! content push.

use crate::error::EvaluationError;
use crate::models::evaluation::{ApprovalReason, EvaluationInput, EvaluationResult};
use crate::models::review_event::ReviewEvent;
use crate::models::reviewer_decision::ReviewerDecision;
use std::collections::BTreeMap;

/// Verify that `events` are ordered by `submitted_at` ascending.
///
/// Equal timestamps are allowed. The sequence is never re-sorted; a
/// violation is a caller contract breach and is surfaced as an error.
fn validate_ordering(events: &[ReviewEvent]) -> Result<(), EvaluationError> {
    for (index, pair) in events.windows(2).enumerate() {
        if pair[1].submitted_at < pair[0].submitted_at {
            return Err(EvaluationError::out_of_order(
                format!(
                    "submitted_at {} precedes previous event at {}",
                    pair[1].submitted_at, pair[0].submitted_at
                ),
                index + 1,
            ));
        }
    }
    Ok(())
}

/// Fold chronological events into one standing decision per reviewer.
///
/// Keyed by reviewer login. Decisive states (`Approved`,
/// `ChangesRequested`) overwrite the reviewer's stored verdict; `Other`
/// events are transparent and never erase a prior decisive state.
pub fn fold_decisions(events: &[ReviewEvent]) -> BTreeMap<String, ReviewerDecision> {
    let mut decisions: BTreeMap<String, ReviewerDecision> = BTreeMap::new();
    for event in events {
        let decision = decisions
            .entry(event.reviewer.clone())
            .or_insert_with(|| ReviewerDecision::new(event.reviewer.clone()));
        decision.observe(event.state, event.submitted_at);
    }
    decisions
}

/// Decide whether the request is approved and mergeable.
///
/// Precondition: `input.events` is ordered by `submitted_at` ascending;
/// out-of-order input yields [`EvaluationError::OutOfOrderEvents`].
///
/// Each reviewer is judged only by their own latest decisive event: a later
/// approval from reviewer B never clears reviewer A's outstanding request
/// for changes, and only a re-review by A can. An approval is stale when
/// the most recent approval across all approving reviewers is strictly
/// earlier than `content_pushed_at`.
///
/// Pure apart from log output; safe to call repeatedly and concurrently.
pub fn evaluate(input: &EvaluationInput) -> Result<EvaluationResult, EvaluationError> {
    if input.events.is_empty() {
        log::info!("no reviews submitted for this request");
        return Ok(EvaluationResult::rejected(ApprovalReason::NoReviews));
    }

    validate_ordering(&input.events)?;

    let decisions = fold_decisions(&input.events);

    // BTreeMap iteration keeps these sorted by login.
    let approved_by: Vec<String> = decisions
        .values()
        .filter(|d| d.is_approving())
        .map(|d| d.reviewer.clone())
        .collect();
    let changes_requested_by: Vec<String> = decisions
        .values()
        .filter(|d| d.is_requesting_changes())
        .map(|d| d.reviewer.clone())
        .collect();

    if !changes_requested_by.is_empty() {
        log::info!(
            "the following users requested changes: {}",
            changes_requested_by.join(", ")
        );
        return Ok(EvaluationResult {
            approved: false,
            reason: ApprovalReason::ChangesRequestedPending,
            approved_by,
            changes_requested_by,
        });
    }

    if !approved_by.is_empty() {
        log::info!("the following users approved: {}", approved_by.join(", "));
        let latest_approval = decisions
            .values()
            .filter_map(|d| d.latest_approval_time)
            .max();
        // filter above guarantees at least one approval time exists
        if let Some(approved_at) = latest_approval {
            if approved_at < input.content_pushed_at {
                log::info!(
                    "content pushed at {} after the last approval at {}",
                    input.content_pushed_at,
                    approved_at
                );
                return Ok(EvaluationResult {
                    approved: false,
                    reason: ApprovalReason::StaleApproval,
                    approved_by,
                    changes_requested_by,
                });
            }
        }
        return Ok(EvaluationResult {
            approved: true,
            reason: ApprovalReason::Approved,
            approved_by,
            changes_requested_by,
        });
    }

    log::info!("no decisive reviews; the request is not approved");
    Ok(EvaluationResult::rejected(ApprovalReason::NotApproved))
}
