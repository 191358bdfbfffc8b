//! Feedback API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/feedback",
        get(handler::list).post(handler::submit),
    )
}
