//! Zone API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::models::{Zone, ZoneCreate};

use crate::core::ServerState;
use crate::query;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ZoneListQuery {
    /// Hotel id equality filter
    pub hotel: Option<String>,
}

/// GET /api/zones - List zones, optionally scoped to one hotel
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ZoneListQuery>,
) -> AppResult<Json<Vec<Zone>>> {
    let zones = query::filter_zones(&state.store().zones(), params.hotel.as_deref());
    Ok(Json(zones))
}

/// GET /api/zones/{id} - Fetch a single zone
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Zone>> {
    let zone = state
        .store()
        .zone_by_id(&id)
        .ok_or_else(|| AppError::not_found(format!("Zone {id} not found")))?;
    Ok(Json(zone))
}

/// POST /api/zones - Create a zone
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ZoneCreate>,
) -> AppResult<Json<Zone>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("Zone name must not be empty"));
    }
    let zone = state.store().create_zone(payload)?;
    tracing::info!(zone_id = %zone.id, name = %zone.name, "Zone created");
    Ok(Json(zone))
}
