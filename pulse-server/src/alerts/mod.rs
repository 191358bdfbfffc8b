//! Alert workflow
//!
//! Derivation and the follow-up state machine. States only move
//! forward:
//!
//! ```text
//! new ──assign──▶ in_progress ──resolve──▶ resolved
//!  └────────────────resolve───────────────────▲
//! ```
//!
//! `resolve` on an already-resolved alert is a no-op; the original
//! `resolved_at` stamp is kept. `assign` on a resolved alert is
//! rejected; alerts never reopen.

use chrono::{DateTime, Utc};
use thiserror::Error;

use shared::models::{Alert, AlertStatus, Feedback};

/// Ratings at or below this derive an alert
pub const ALERT_RATING_THRESHOLD: u8 = 2;

/// Illegal state transitions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Alert is already resolved")]
    AlreadyResolved,
}

/// Derive an alert from a qualifying feedback record
///
/// Returns `None` for ratings above the threshold. Fresh alerts start
/// `new` and unassigned; `created_at` mirrors the feedback.
pub fn derive_from_feedback(
    feedback: &Feedback,
    next_id: impl FnOnce() -> String,
) -> Option<Alert> {
    if feedback.rating > ALERT_RATING_THRESHOLD {
        return None;
    }
    Some(Alert {
        id: next_id(),
        feedback_id: feedback.id.clone(),
        hotel_id: feedback.hotel_id.clone(),
        zone_id: feedback.zone_id.clone(),
        status: AlertStatus::New,
        assigned_to: None,
        created_at: feedback.created_at,
        resolved_at: None,
    })
}

/// Assign the alert to a staff member
///
/// Moves new → in_progress; reassigning an in_progress alert is
/// allowed and only swaps the assignee.
pub fn assign(alert: &mut Alert, user_id: &str) -> Result<(), TransitionError> {
    if alert.status == AlertStatus::Resolved {
        return Err(TransitionError::AlreadyResolved);
    }
    alert.status = AlertStatus::InProgress;
    alert.assigned_to = Some(user_id.to_string());
    Ok(())
}

/// Resolve the alert, stamping `resolved_at`
///
/// Idempotent: an already-resolved alert is left untouched.
pub fn resolve(alert: &mut Alert, now: DateTime<Utc>) {
    if alert.status == AlertStatus::Resolved {
        return;
    }
    alert.status = AlertStatus::Resolved;
    alert.resolved_at = Some(now);
}
