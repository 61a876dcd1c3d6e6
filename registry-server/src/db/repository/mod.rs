//! Repository Module
//!
//! The [`EmployeeStore`] trait is the seam between the registration service
//! and persistence. Two realizations:
//!
//! - [`SqliteEmployeeRepository`] - single SQLite table, unique constraints
//! - [`MemoryEmployeeRepository`] - in-process tables with hash indexes
//!
//! Both enforce `idNumber` and `employeeNumber` uniqueness inside the store;
//! callers never pre-check with a scan.

pub mod employee;
pub mod memory;

// Re-exports
pub use employee::SqliteEmployeeRepository;
pub use memory::MemoryEmployeeRepository;

use async_trait::async_trait;
use shared::models::{Employee, NewEmployee};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Field protected by a store-level uniqueness constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    IdNumber,
    EmployeeNumber,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdNumber => f.write_str("idNumber"),
            Self::EmployeeNumber => f.write_str("employeeNumber"),
        }
    }
}

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Duplicate {field}: {value}")]
    Duplicate { field: UniqueField, value: String },

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Collection a record belongs to: one application, one owner
///
/// Rendered as `artifacts/{app_id}/users/{owner_id}/employees`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    pub app_id: String,
    pub owner_id: String,
}

impl Scope {
    pub fn new(app_id: impl Into<String>, owner_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            owner_id: owner_id.into(),
        }
    }

    /// Document-style collection path
    pub fn collection_path(&self) -> String {
        format!("artifacts/{}/users/{}/employees", self.app_id, self.owner_id)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.collection_path())
    }
}

/// Employee record store
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Backend name for diagnostics ("sqlite", "memory")
    fn backend(&self) -> &'static str;

    /// Insert one record atomically
    ///
    /// Fails with [`RepoError::Duplicate`] when `id_number` or
    /// `employee_number` is already taken anywhere in the application.
    async fn insert(&self, scope: &Scope, new: NewEmployee) -> RepoResult<Employee>;

    /// All records of the collection, in roster order
    async fn list(&self, scope: &Scope) -> RepoResult<Vec<Employee>>;

    /// Remove a record; `false` when the collection has no such id
    async fn delete(&self, scope: &Scope, id: i64) -> RepoResult<bool>;

    /// Number of records in the collection
    async fn count(&self, scope: &Scope) -> RepoResult<u64>;

    /// Cheap liveness check
    async fn ping(&self) -> RepoResult<()>;
}

/// Roster order: first name, surname (ASCII case-insensitive), then employee number
///
/// Mirrors `ORDER BY first_name COLLATE NOCASE, surname COLLATE NOCASE, employee_number`.
pub fn roster_order(a: &Employee, b: &Employee) -> Ordering {
    a.first_name
        .to_ascii_lowercase()
        .cmp(&b.first_name.to_ascii_lowercase())
        .then_with(|| {
            a.surname
                .to_ascii_lowercase()
                .cmp(&b.surname.to_ascii_lowercase())
        })
        .then_with(|| a.employee_number.cmp(&b.employee_number))
}
