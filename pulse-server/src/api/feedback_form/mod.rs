//! Public feedback-form API module
//!
//! The only unauthenticated-guest-facing surface: resolves the `qr`
//! and `z` query parameters of a scanned QR code into the question set
//! and branding to display.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/feedback-form", get(handler::view))
}
