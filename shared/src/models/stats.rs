//! Feedback Statistics Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One histogram bucket of the 1..=5 rating distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingBucket {
    pub rating: u8,
    pub count: usize,
}

/// Per-day aggregate within the trailing window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStat {
    pub date: NaiveDate,
    pub average_rating: f64,
    pub count: usize,
}

/// Aggregated rating statistics, optionally zone-scoped
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStats {
    pub hotel_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    pub average_rating: f64,
    pub total_feedback: usize,
    /// Fixed 5 buckets, ascending rating order
    pub feedback_by_rating: Vec<RatingBucket>,
    /// Trailing 7-day window, oldest first
    pub feedback_over_time: Vec<DailyStat>,
}
