//! Settings API Handlers

use axum::{Json, extract::State};

use shared::models::{Hotel, HotelUpdate};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /api/settings/hotel - Profile of the primary hotel
pub async fn get_hotel(State(state): State<ServerState>) -> AppResult<Json<Hotel>> {
    let hotel = state
        .store()
        .primary_hotel()
        .ok_or_else(|| AppError::not_found("No hotel configured"))?;
    Ok(Json(hotel))
}

/// PUT /api/settings/hotel - Update the primary hotel profile
pub async fn update_hotel(
    State(state): State<ServerState>,
    Json(payload): Json<HotelUpdate>,
) -> AppResult<Json<Hotel>> {
    let store = state.store();
    let hotel = store
        .primary_hotel()
        .ok_or_else(|| AppError::not_found("No hotel configured"))?;
    let updated = store.update_hotel(&hotel.id, payload)?;
    tracing::info!(hotel_id = %updated.id, "Hotel profile updated");
    Ok(Json(updated))
}
