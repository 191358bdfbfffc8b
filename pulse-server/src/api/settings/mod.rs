//! Settings API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/settings/hotel",
        get(handler::get_hotel).put(handler::update_hotel),
    )
}
