//! Employee Repository (in-memory)
//!
//! Tables live behind one `RwLock`; unique fields are backed by hash indexes
//! that are checked and updated under the same write guard as the row, so an
//! insert either lands completely or not at all.

use super::{EmployeeStore, RepoError, RepoResult, Scope, UniqueField, roster_order};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::{Employee, NewEmployee};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

struct StoredEmployee {
    scope: Scope,
    employee: Employee,
}

#[derive(Default)]
struct Tables {
    next_id: i64,
    rows: BTreeMap<i64, StoredEmployee>,
    /// (app_id, id_number) -> row id
    by_id_number: HashMap<(String, String), i64>,
    /// (app_id, employee_number) -> row id
    by_employee_number: HashMap<(String, String), i64>,
}

#[derive(Clone, Default)]
pub struct MemoryEmployeeRepository {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeRepository {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, scope: &Scope, new: NewEmployee) -> RepoResult<Employee> {
        let mut tables = self.tables.write();

        let id_key = (scope.app_id.clone(), new.id_number.clone());
        if tables.by_id_number.contains_key(&id_key) {
            return Err(RepoError::Duplicate {
                field: UniqueField::IdNumber,
                value: new.id_number,
            });
        }
        let number_key = (scope.app_id.clone(), new.employee_number.clone());
        if tables.by_employee_number.contains_key(&number_key) {
            return Err(RepoError::Duplicate {
                field: UniqueField::EmployeeNumber,
                value: new.employee_number,
            });
        }

        tables.next_id += 1;
        let id = tables.next_id;
        let employee = Employee {
            id,
            employee_number: new.employee_number,
            first_name: new.first_name,
            surname: new.surname,
            email: new.email,
            id_number: new.id_number,
            position: new.position,
            department: new.department,
            created_at: new.created_at,
        };

        tables.by_id_number.insert(id_key, id);
        tables.by_employee_number.insert(number_key, id);
        tables.rows.insert(
            id,
            StoredEmployee {
                scope: scope.clone(),
                employee: employee.clone(),
            },
        );
        Ok(employee)
    }

    async fn list(&self, scope: &Scope) -> RepoResult<Vec<Employee>> {
        let tables = self.tables.read();
        let mut employees: Vec<Employee> = tables
            .rows
            .values()
            .filter(|row| &row.scope == scope)
            .map(|row| row.employee.clone())
            .collect();
        employees.sort_by(roster_order);
        Ok(employees)
    }

    async fn delete(&self, scope: &Scope, id: i64) -> RepoResult<bool> {
        let mut tables = self.tables.write();
        match tables.rows.get(&id) {
            Some(row) if &row.scope == scope => {}
            _ => return Ok(false),
        }

        if let Some(row) = tables.rows.remove(&id) {
            let app_id = row.scope.app_id;
            tables
                .by_id_number
                .remove(&(app_id.clone(), row.employee.id_number));
            tables
                .by_employee_number
                .remove(&(app_id, row.employee.employee_number));
        }
        Ok(true)
    }

    async fn count(&self, scope: &Scope) -> RepoResult<u64> {
        let tables = self.tables.read();
        Ok(tables.rows.values().filter(|row| &row.scope == scope).count() as u64)
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
