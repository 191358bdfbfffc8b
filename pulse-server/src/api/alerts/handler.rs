//! Alerts API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use shared::models::{Alert, AlertStatus};

use crate::core::ServerState;
use crate::query;
use crate::utils::AppResult;

// ============================================================================
// Query Parameters and Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AlertListQuery {
    /// Status equality filter (new | in_progress | resolved)
    pub status: Option<AlertStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    pub user_id: String,
}

/// Alert enriched for the worklist view
///
/// Unresolvable references fall back to display placeholders rather
/// than failing the whole list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertView {
    #[serde(flatten)]
    pub alert: Alert,
    pub zone_name: String,
    /// Rating of the originating feedback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    /// Guest comment of the originating feedback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Display name of the assignee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_name: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/alerts - Worklist, new alerts first, then newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<AlertListQuery>,
) -> AppResult<Json<Vec<AlertView>>> {
    let store = state.store();

    let mut items = query::filter_alerts(&store.alerts(), params.status);
    query::sort_alerts(&mut items);

    let views = items
        .into_iter()
        .map(|alert| {
            let zone_name = store.zone_name(&alert.zone_id);
            let feedback = store.feedback_by_id(&alert.feedback_id);
            let assignee_name = alert
                .assigned_to
                .as_deref()
                .and_then(|id| store.user_by_id(id))
                .map(|u| u.name);
            AlertView {
                zone_name,
                rating: feedback.as_ref().map(|f| f.rating),
                comment: feedback.and_then(|f| f.comment),
                assignee_name,
                alert,
            }
        })
        .collect();

    Ok(Json(views))
}

/// POST /api/alerts/{id}/assign - Hand the alert to a staff member
pub async fn assign(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<AssignRequest>,
) -> AppResult<Json<Alert>> {
    let alert = state.store().assign_alert(&id, &payload.user_id)?;
    Ok(Json(alert))
}

/// POST /api/alerts/{id}/resolve - Close the alert
pub async fn resolve(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Alert>> {
    let alert = state.store().resolve_alert(&id)?;
    Ok(Json(alert))
}
