//! HotelPulse Server - guest feedback analytics backend
//!
//! # Architecture
//!
//! The whole dataset is synthetic and lives in process memory; there is
//! no persistence and no authentication. Core pieces:
//!
//! - **Store** (`store`): in-memory collections seeded by a
//!   deterministic sample generator
//! - **Stats** (`stats`): pure rating aggregation (histogram, 7-day trend)
//! - **Alerts** (`alerts`): low-rating derivation and the follow-up
//!   state machine
//! - **Query** (`query`): list filtering and sorting
//! - **HTTP API** (`api`): RESTful interface for the dashboard
//!
//! # Module structure
//!
//! ```text
//! pulse-server/src/
//! ├── core/          # config, state, server
//! ├── store/         # in-memory dataset + sample generator
//! ├── stats/         # rating aggregation
//! ├── alerts/        # alert workflow
//! ├── query/         # filtering and sorting
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # errors, logging
//! ```

pub mod alerts;
pub mod api;
pub mod core;
pub mod query;
pub mod stats;
pub mod store;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use store::{DataStore, SampleDataset};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Prepare the process environment (dotenv + logging)
pub fn setup_environment() -> anyhow::Result<()> {
    // .env is optional; ignore a missing file
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __  __      __       __   ____        __
   / / / /___  / /____  / /  / __ \__  __/ /_______
  / /_/ / __ \/ __/ _ \/ /  / /_/ / / / / / ___/ _ \
 / __  / /_/ / /_/  __/ /  / ____/ /_/ / (__  )  __/
/_/ /_/\____/\__/\___/_/  /_/    \__,_/_/____/\___/
"#
    );
}
