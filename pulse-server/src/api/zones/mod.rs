//! Zone API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/zones", get(handler::list).post(handler::create))
        .route("/api/zones/{id}", get(handler::get_by_id))
}
