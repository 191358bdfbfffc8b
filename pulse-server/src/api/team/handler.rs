//! Team API Handlers

use axum::{Json, extract::State};

use shared::models::{User, UserCreate};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /api/team - List team members
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<User>>> {
    Ok(Json(state.store().users()))
}

/// POST /api/team - Add a team member
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<User>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("Name must not be empty"));
    }
    if !payload.email.contains('@') {
        return Err(AppError::validation(format!(
            "Invalid email address: {}",
            payload.email
        )));
    }
    let user = state.store().create_user(payload);
    tracing::info!(user_id = %user.id, "Team member added");
    Ok(Json(user))
}
