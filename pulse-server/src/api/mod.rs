//! API routing module
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`dashboard`] - aggregated analytics overview
//! - [`feedback`] - guest feedback listing and submission
//! - [`alerts`] - low-rating alert worklist
//! - [`zones`] - zone management
//! - [`qrcodes`] - QR code management
//! - [`team`] - team member management
//! - [`settings`] - hotel profile settings
//! - [`feedback_form`] - public feedback-collection view

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

pub mod alerts;
pub mod dashboard;
pub mod feedback;
pub mod feedback_form;
pub mod health;
pub mod qrcodes;
pub mod settings;
pub mod team;
pub mod zones;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(dashboard::router())
        .merge(feedback::router())
        .merge(alerts::router())
        .merge(zones::router())
        .merge(qrcodes::router())
        .merge(team::router())
        .merge(settings::router())
        .merge(feedback_form::router())
}

/// Build the full application with state and middleware
pub fn create_app(state: ServerState) -> Router {
    build_app()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
