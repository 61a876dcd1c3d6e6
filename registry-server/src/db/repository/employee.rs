//! Employee Repository (SQLite)

use super::{EmployeeStore, RepoError, RepoResult, Scope, UniqueField};
use async_trait::async_trait;
use shared::models::{Employee, NewEmployee};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Map a failed INSERT to the violated constraint, if any
fn insert_error(err: sqlx::Error, new: &NewEmployee) -> RepoError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.is_unique_violation()
    {
        // SQLite names the columns: "UNIQUE constraint failed: employees.app_id, employees.id_number"
        return if db_err.message().contains("employee_number") {
            RepoError::Duplicate {
                field: UniqueField::EmployeeNumber,
                value: new.employee_number.clone(),
            }
        } else {
            RepoError::Duplicate {
                field: UniqueField::IdNumber,
                value: new.id_number.clone(),
            }
        };
    }
    err.into()
}

#[async_trait]
impl EmployeeStore for SqliteEmployeeRepository {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    async fn insert(&self, scope: &Scope, new: NewEmployee) -> RepoResult<Employee> {
        sqlx::query_as::<_, Employee>(
            "INSERT INTO employees
                (app_id, owner_id, employee_number, first_name, surname, email,
                 id_number, position, department, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING id, employee_number, first_name, surname, email,
                       id_number, position, department, created_at",
        )
        .bind(&scope.app_id)
        .bind(&scope.owner_id)
        .bind(&new.employee_number)
        .bind(&new.first_name)
        .bind(&new.surname)
        .bind(&new.email)
        .bind(&new.id_number)
        .bind(&new.position)
        .bind(&new.department)
        .bind(new.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error(e, &new))
    }

    async fn list(&self, scope: &Scope) -> RepoResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, employee_number, first_name, surname, email,
                    id_number, position, department, created_at
             FROM employees
             WHERE app_id = ? AND owner_id = ?
             ORDER BY first_name COLLATE NOCASE, surname COLLATE NOCASE, employee_number",
        )
        .bind(&scope.app_id)
        .bind(&scope.owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(employees)
    }

    async fn delete(&self, scope: &Scope, id: i64) -> RepoResult<bool> {
        let result =
            sqlx::query("DELETE FROM employees WHERE id = ? AND app_id = ? AND owner_id = ?")
                .bind(id)
                .bind(&scope.app_id)
                .bind(&scope.owner_id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self, scope: &Scope) -> RepoResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM employees WHERE app_id = ? AND owner_id = ?",
        )
        .bind(&scope.app_id)
        .bind(&scope.owner_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count.max(0) as u64)
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
