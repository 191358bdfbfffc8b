//! Data models
//!
//! Shared between pulse-server and the dashboard frontend (via API).
//! All IDs are `String` (sequentially minted by the server's id allocator).

pub mod alert;
pub mod feedback;
pub mod hotel;
pub mod qr_code;
pub mod question;
pub mod stats;
pub mod user;
pub mod zone;

// Re-exports
pub use alert::*;
pub use feedback::*;
pub use hotel::*;
pub use qr_code::*;
pub use question::*;
pub use stats::*;
pub use user::*;
pub use zone::*;
