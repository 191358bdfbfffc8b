//! QR Code API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/qrcodes", get(handler::list).post(handler::create))
        .route("/api/qrcodes/{id}", get(handler::get_by_id))
}
