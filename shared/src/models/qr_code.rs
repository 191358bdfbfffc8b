//! QR Code Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Question;

/// QR code entity: a named feedback-collection endpoint bound to a zone
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCode {
    pub id: String,
    pub zone_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Custom question set; the default set applies when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_questions: Option<Vec<Question>>,
}

/// Create QR code payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeCreate {
    pub zone_id: String,
    pub name: String,
    pub custom_questions: Option<Vec<Question>>,
}
