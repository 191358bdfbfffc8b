//! Feedback API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use shared::models::{Feedback, FeedbackSubmit};

use crate::core::ServerState;
use crate::query::{self, FeedbackFilter};
use crate::utils::AppResult;

// ============================================================================
// Query Parameters and Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct FeedbackListQuery {
    /// Zone id equality filter
    pub zone: Option<String>,
    /// Exact rating filter (1..=5)
    pub rating: Option<u8>,
}

/// Feedback enriched with the zone's display name
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackView {
    #[serde(flatten)]
    pub feedback: Feedback,
    pub zone_name: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/feedback - List feedback, filtered and newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<FeedbackListQuery>,
) -> AppResult<Json<Vec<FeedbackView>>> {
    let store = state.store();
    let filter = FeedbackFilter {
        zone_id: params.zone,
        rating: params.rating,
    };

    let mut items = query::filter_feedback(&store.feedback(), &filter);
    query::sort_feedback(&mut items);

    let views = items
        .into_iter()
        .map(|feedback| {
            let zone_name = store.zone_name(&feedback.zone_id);
            FeedbackView {
                feedback,
                zone_name,
            }
        })
        .collect();

    Ok(Json(views))
}

/// POST /api/feedback - Record a guest submission
///
/// A rating ≤ 2 synchronously derives an alert (status `new`).
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<FeedbackSubmit>,
) -> AppResult<Json<Feedback>> {
    let (feedback, _alert) = state.store().record_feedback(payload)?;
    Ok(Json(feedback))
}
