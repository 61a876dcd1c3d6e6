//! Roster feed payload

use serde::{Deserialize, Serialize};

use super::Employee;

/// Full roster of one collection, pushed to live subscribers
///
/// Every mutation re-delivers the whole sorted set; clients replace their
/// table instead of patching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    /// Collection version (incremented on every mutation)
    pub version: u64,
    /// What triggered this snapshot ("snapshot", "created", "deleted")
    pub action: String,
    /// Number of records in `employees`
    pub total: usize,
    /// All records, sorted by name
    pub employees: Vec<Employee>,
}

impl RosterSnapshot {
    pub fn new(version: u64, action: impl Into<String>, employees: Vec<Employee>) -> Self {
        Self {
            version,
            action: action.into(),
            total: employees.len(),
            employees,
        }
    }
}
