//! Feedback Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Answer to a single survey question (rating questions answer with a
/// number, choice and text questions with a string)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Rating(u8),
    Text(String),
}

/// Per-question response attached to a feedback record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub question_id: String,
    pub answer: Answer,
}

/// Guest feedback entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub qr_code_id: String,
    pub zone_id: String,
    pub hotel_id: String,
    /// Overall rating, 1..=5
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<Vec<QuestionResponse>>,
}

/// Submit feedback payload (public feedback form)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmit {
    pub qr_code_id: String,
    pub zone_id: String,
    pub rating: u8,
    pub comment: Option<String>,
    pub responses: Option<Vec<QuestionResponse>>,
}
