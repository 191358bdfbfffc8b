//! Shared types for HotelPulse
//!
//! Data models used by the server and its API clients. All wire field
//! names are camelCase to match the dashboard frontend.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
