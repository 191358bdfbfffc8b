//! Alerts API module

mod handler;

use axum::{Router, routing::{get, post}};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/alerts", get(handler::list))
        .route("/api/alerts/{id}/assign", post(handler::assign))
        .route("/api/alerts/{id}/resolve", post(handler::resolve))
}
