//! Registration Service
//!
//! Turns a raw request body into a stored [`Employee`]:
//! parse → validate → assign employee number → insert.
//! Validation failures never reach the store.

use std::sync::Arc;

use serde_json::Value;
use shared::error::{AppError, AppResult};
use shared::models::{Employee, EmployeeCreate, NewEmployee};
use validator::ValidateEmail;

use crate::db::repository::{EmployeeStore, Scope};
use crate::services::EmployeeNumberGenerator;

/// Outcome of a successful registration
#[derive(Debug, Clone)]
pub struct Registration {
    pub employee: Employee,
    pub message: String,
}

#[derive(Clone)]
pub struct RegistrationService {
    store: Arc<dyn EmployeeStore>,
    numbers: Arc<dyn EmployeeNumberGenerator>,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn EmployeeStore>, numbers: Arc<dyn EmployeeNumberGenerator>) -> Self {
        Self { store, numbers }
    }

    /// Register a new hire in `scope` from the raw JSON body
    pub async fn register(&self, scope: &Scope, body: &[u8]) -> AppResult<Registration> {
        let payload = parse_payload(body)?;
        let new_employee = self.prepare(payload)?;

        let employee = self.store.insert(scope, new_employee).await?;

        // Diagnostic only; a failed count must not fail a stored registration
        match self.store.count(scope).await {
            Ok(total) => tracing::info!(
                collection = %scope,
                name = %employee.full_name(),
                id_number = %employee.id_number,
                employee_number = %employee.employee_number,
                total_records = total,
                "Employee registered"
            ),
            Err(e) => tracing::warn!(
                collection = %scope,
                employee_number = %employee.employee_number,
                error = %e,
                "Employee registered, record count unavailable"
            ),
        }

        let message = format!(
            "Employee {} registered successfully! Employee Number: {}",
            employee.full_name(),
            employee.employee_number
        );
        Ok(Registration { employee, message })
    }

    /// Validate a payload and assign its employee number
    pub fn prepare(&self, payload: EmployeeCreate) -> AppResult<NewEmployee> {
        let first_name = non_blank(payload.first_name).or_else(|| non_blank(payload.name));
        let surname = non_blank(payload.surname).or_else(|| non_blank(payload.last_name));
        let id_number = non_blank(payload.id_number);

        let (first_name, surname, id_number) = match (first_name, surname, id_number) {
            (Some(f), Some(s), Some(i)) => (f, s, i),
            (f, s, i) => {
                let missing: Vec<&str> = [
                    ("firstName", f.is_none()),
                    ("surname", s.is_none()),
                    ("idNumber", i.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, absent)| absent.then_some(field))
                .collect();
                return Err(AppError::required_fields(&missing));
            }
        };

        let email = non_blank(payload.email);
        if email.as_ref().is_some_and(|e| !e.validate_email()) {
            return Err(AppError::validation("Error: Invalid email address.")
                .with_detail("field", "email"));
        }

        let employee_number =
            non_blank(payload.employee_number).unwrap_or_else(|| self.numbers.generate());

        Ok(NewEmployee {
            employee_number,
            first_name,
            surname,
            email,
            id_number,
            position: non_blank(payload.position),
            department: non_blank(payload.department),
            created_at: shared::util::now_millis(),
        })
    }
}

/// Decode the request body
///
/// An empty body or any empty JSON value (`null`, `{}`, `[]`, `""`, `0`,
/// `false`) means "nothing submitted". Other non-objects are malformed.
pub fn parse_payload(body: &[u8]) -> AppResult<EmployeeCreate> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::no_data());
    }

    let value: Value = serde_json::from_slice(body).map_err(AppError::malformed_body)?;
    if is_empty_value(&value) {
        return Err(AppError::no_data());
    }
    if !value.is_object() {
        return Err(AppError::malformed_body("expected a JSON object"));
    }

    serde_json::from_value(value).map_err(AppError::malformed_body)
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
