//! Utility module: shared helpers and types
//!
//! - [`AppError`] - application error type
//! - [`AppResult`] - handler result alias
//! - logging setup

pub mod error;
pub mod logger;

pub use error::{AppError, AppResponse};

/// Result type alias for API handlers
pub type AppResult<T> = Result<T, AppError>;
