//! Employee Registry Server
//!
//! # Overview
//!
//! HTTP backend for an employee registration form:
//!
//! - **Registration** (`services`): validation, employee numbers, duplicate checks
//! - **Record stores** (`db`): SQLite or in-memory, uniqueness enforced in the store
//! - **Live listing** (`live`): per-collection roster feed over server-sent events
//! - **HTTP API** (`api`): register, list, stream, delete
//!
//! # Module layout
//!
//! ```text
//! registry-server/src/
//! ├── core/          # config, state, server, errors
//! ├── auth/          # caller identity (x-user-id)
//! ├── services/      # employee numbers, registration
//! ├── live/          # roster hub
//! ├── api/           # HTTP routes and handlers
//! ├── utils/         # logging, error mapping
//! └── db/            # SQLite pool and stores
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod live;
pub mod services;
pub mod utils;

// Re-exports
pub use api::build_app;
pub use auth::CurrentOwner;
pub use core::{Config, Server, ServerError, ServerState, StoreBackend};
pub use db::repository::{EmployeeStore, MemoryEmployeeRepository, Scope};
pub use live::{RosterAction, RosterHub, RosterSubscription};
pub use services::{EmployeeNumberGenerator, NumberStrategy, RegistrationService};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::init_logger_with_file;

// Security logging macro
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env`, read the configuration and start logging
pub fn setup_environment() -> Result<Config, ServerError> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    // Production always logs JSON
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json || config.is_production()),
        config.log_dir.as_deref(),
    );
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ____             _      __
   / __ \___  ____ _(_)____/ /________  __
  / /_/ / _ \/ __ `/ / ___/ __/ ___/ / / /
 / _, _/  __/ /_/ / (__  ) /_/ /  / /_/ /
/_/ |_|\___/\__, /_/____/\__/_/   \__, /
           /____/                /____/
    "#
    );
}
