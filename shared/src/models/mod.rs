//! Data models
//!
//! Shared between registry-server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod employee;
pub mod roster;

// Re-exports
pub use employee::*;
pub use roster::*;
