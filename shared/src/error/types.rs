//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type of the registry, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Request body was absent or empty
    pub fn no_data() -> Self {
        Self::with_message(ErrorCode::InvalidRequest, "Error: No data provided.")
    }

    /// Request body could not be parsed
    pub fn malformed_body(reason: impl std::fmt::Display) -> Self {
        Self::with_message(
            ErrorCode::InvalidRequest,
            format!("Error parsing JSON: {}", reason),
        )
    }

    /// One or more required fields are missing or empty
    pub fn required_fields(fields: &[&str]) -> Self {
        let fields: Vec<Value> = fields.iter().map(|f| Value::from(*f)).collect();
        Self::with_message(ErrorCode::RequiredField, "Error: Missing required fields.")
            .with_detail("fields", fields)
    }

    /// The ID number is already registered
    pub fn duplicate_id_number(id_number: &str) -> Self {
        Self::with_message(
            ErrorCode::EmployeeIdNumberExists,
            format!(
                "Error: An employee with ID number {} is already registered.",
                id_number
            ),
        )
        .with_detail("idNumber", id_number)
    }

    /// The employee number is already assigned
    pub fn duplicate_employee_number(employee_number: &str) -> Self {
        Self::with_message(
            ErrorCode::EmployeeNumberExists,
            format!(
                "Error: Employee number {} is already assigned.",
                employee_number
            ),
        )
        .with_detail("employeeNumber", employee_number)
    }

    /// No employee with this id in the caller's collection
    pub fn employee_not_found(id: i64) -> Self {
        Self::with_message(
            ErrorCode::EmployeeNotFound,
            format!("Employee {} not found", id),
        )
        .with_detail("id", id)
    }

    /// Create a not authenticated error
    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    /// Create an invalid identity error
    pub fn invalid_identity(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::IdentityInvalid, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }
}

/// Error body returned by every failing endpoint
///
/// ```json
/// { "code": 8002, "message": "Error: ...", "details": { "idNumber": "123" } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Error code, see [`ErrorCode`]
    pub code: u16,
    /// Human-readable message
    pub message: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ApiResponse {
    /// Build the body for an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::error(&self);

        // Log system errors
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::EmployeeNotFound);
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
        assert_eq!(err.message, "Employee not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Invalid email address")
            .with_detail("field", "email")
            .with_detail("reason", "format");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "email");
        assert_eq!(details.get("reason").unwrap(), "format");
    }

    #[test]
    fn test_required_fields_lists_fields() {
        let err = AppError::required_fields(&["surname", "idNumber"]);
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Error: Missing required fields.");

        let details = err.details.unwrap();
        assert_eq!(
            details.get("fields").unwrap(),
            &serde_json::json!(["surname", "idNumber"])
        );
    }

    #[test]
    fn test_duplicate_constructors() {
        let err = AppError::duplicate_id_number("123");
        assert_eq!(err.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            err.message,
            "Error: An employee with ID number 123 is already registered."
        );

        let err = AppError::duplicate_employee_number("EMP-1");
        assert_eq!(err.code, ErrorCode::EmployeeNumberExists);
        assert_eq!(err.http_status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_malformed_and_empty_body() {
        let err = AppError::no_data();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(err.message, "Error: No data provided.");

        let err = AppError::malformed_body("expected value at line 1 column 1");
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
        assert!(err.message.starts_with("Error parsing JSON: "));
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::employee_not_found(42);
        assert_eq!(format!("{}", err), "Employee 42 not found");
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_api_response_error() {
        let err = AppError::duplicate_id_number("9001");
        let response = ApiResponse::error(&err);

        assert_eq!(response.code, 8002);
        assert!(response.message.contains("9001"));
        assert!(response.details.is_some());
    }

    #[test]
    fn test_api_response_serialize() {
        let response = ApiResponse::error(&AppError::new(ErrorCode::DatabaseError));
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"code":9002,"message":"Database error"}"#);
    }
}
