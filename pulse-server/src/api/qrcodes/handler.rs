//! QR Code API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::{QrCode, QrCodeCreate};

use crate::core::ServerState;
use crate::query;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct QrCodeListQuery {
    /// Zone id equality filter
    pub zone: Option<String>,
}

/// GET /api/qrcodes - List QR codes, optionally scoped to one zone
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<QrCodeListQuery>,
) -> AppResult<Json<Vec<QrCode>>> {
    let qr_codes = query::filter_qr_codes(&state.store().qr_codes(), params.zone.as_deref());
    Ok(Json(qr_codes))
}

/// GET /api/qrcodes/{id} - Fetch a single QR code
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<QrCode>> {
    let qr_code = state
        .store()
        .qr_code_by_id(&id)
        .ok_or_else(|| AppError::not_found(format!("QR code {id} not found")))?;
    Ok(Json(qr_code))
}

/// POST /api/qrcodes - Create a QR code bound to a zone
///
/// Without custom questions the default question set applies when the
/// public form is rendered.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<QrCodeCreate>,
) -> AppResult<Json<QrCode>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("QR code name must not be empty"));
    }
    let qr_code = state.store().create_qr_code(payload)?;
    tracing::info!(qr_code_id = %qr_code.id, zone_id = %qr_code.zone_id, "QR code created");
    Ok(Json(qr_code))
}
