//! Banbeis Content Server - education directorate content system
//!
//! # Architecture overview
//!
//! Administrative REST backend for the directorate's public content:
//! geography reference data (divisions, districts, upazilas), centers
//! and their staff, navigation menus and posts with photos/comments.
//!
//! Every resource exposes the same five-endpoint CRUD surface with
//! merge-patch updates and a paginated listing contract
//! (`X-Total-Count` + `Link` headers). Storage is an embedded
//! document database; cross-entity links are weak record-id
//! references resolved by the caller.
//!
//! # Module structure
//!
//! ```text
//! banbeis-server/src/
//! ├── core/          # config, state, server, errors
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # models, repositories, seed
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export the public surface
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, then initialize logging from the environment
/// (`LOG_LEVEL`, `LOG_DIR`)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____  ___    _   ______  _________________
   / __ )/   |  / | / / __ )/ ____/  _/ ___/
  / __  / /| | /  |/ / __  / __/  / / \__ \
 / /_/ / ___ |/ /|  / /_/ / /____/ / ___/ /
/_____/_/  |_/_/ |_/_____/_____/___//____/
    "#
    );
}
