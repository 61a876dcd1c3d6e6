//! Shared types for the employee registry
//!
//! Wire models, the unified error system and small utilities used by
//! `registry-server` and by clients talking to it.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    DeleteResponse, Employee, EmployeeCreate, NewEmployee, RegisterResponse, RosterSnapshot,
};
