//! Alert Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Alert follow-up status
///
/// Only moves forward: new → in_progress → resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    New,
    InProgress,
    Resolved,
}

impl AlertStatus {
    /// Sort weight for list views: new alerts surface first,
    /// resolved last.
    pub fn priority(self) -> u8 {
        match self {
            AlertStatus::New => 0,
            AlertStatus::InProgress => 1,
            AlertStatus::Resolved => 2,
        }
    }
}

/// Alert entity: a flagged low-rating feedback item requiring staff
/// follow-up (derived from feedback with rating ≤ 2)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub feedback_id: String,
    pub hotel_id: String,
    pub zone_id: String,
    pub status: AlertStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
}
