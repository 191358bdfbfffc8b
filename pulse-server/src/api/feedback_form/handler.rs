//! Public Feedback Form Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use shared::models::Question;

use crate::core::ServerState;
use crate::utils::AppResult;

/// Fallback branding when no hotel resolves
const DEFAULT_HOTEL_NAME: &str = "HotelPulse";
/// Fallback zone label when no zone resolves
const DEFAULT_ZONE_NAME: &str = "Our Hotel";

#[derive(Debug, Deserialize)]
pub struct FeedbackFormQuery {
    /// QR code id (selects the question set)
    pub qr: Option<String>,
    /// Zone id (selects branding)
    pub z: Option<String>,
}

/// Everything the public form needs to render
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackFormView {
    pub hotel_name: String,
    pub zone_name: String,
    pub questions: Vec<Question>,
}

/// The three-question set used when a QR code carries no custom ones
fn default_questions() -> Vec<Question> {
    vec![
        Question::rating("default1", "How would you rate your overall experience?", true),
        Question::multiple_choice(
            "default2",
            "Would you recommend us to others?",
            vec!["Yes".into(), "Maybe".into(), "No".into()],
            false,
        ),
        Question::text("default3", "Any suggestions for improvement?", false),
    ]
}

/// GET /api/feedback-form?qr=..&z=..
///
/// Absent or unresolvable parameters fall back to the default question
/// set and branding; a scanned code never shows the guest an error.
pub async fn view(
    State(state): State<ServerState>,
    Query(params): Query<FeedbackFormQuery>,
) -> AppResult<Json<FeedbackFormView>> {
    let store = state.store();

    let qr_code = params.qr.as_deref().and_then(|id| store.qr_code_by_id(id));
    let zone = params.z.as_deref().and_then(|id| store.zone_by_id(id));

    // Branding follows the zone's hotel; without a zone, the primary hotel
    let hotel = zone
        .as_ref()
        .and_then(|z| store.hotel_by_id(&z.hotel_id))
        .or_else(|| store.primary_hotel());

    let questions = qr_code
        .and_then(|qr| qr.custom_questions)
        .unwrap_or_else(default_questions);

    Ok(Json(FeedbackFormView {
        hotel_name: hotel
            .map(|h| h.name)
            .unwrap_or_else(|| DEFAULT_HOTEL_NAME.to_string()),
        zone_name: zone
            .map(|z| z.name)
            .unwrap_or_else(|| DEFAULT_ZONE_NAME.to_string()),
        questions,
    }))
}
