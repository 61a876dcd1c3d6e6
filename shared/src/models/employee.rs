//! Employee Model

use serde::{Deserialize, Serialize};

/// Registered employee record
///
/// `id` is assigned by the store, `employee_number` is generated at
/// registration (or supplied by the registering client) and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub employee_number: String,
    pub first_name: String,
    pub surname: String,
    pub email: Option<String>,
    pub id_number: String,
    pub position: Option<String>,
    pub department: Option<String>,
    /// Creation time (epoch millis)
    #[serde(rename = "timestamp")]
    pub created_at: i64,
}

impl Employee {
    /// "First Surname"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }
}

/// Registration payload as submitted by the form
///
/// Every field is optional at the wire level so that a missing field is
/// reported as a validation error rather than a parse error. The older form
/// spellings `name` and `lastName` are kept as separate fields so a body may
/// carry both; the canonical `firstName`/`surname` wins when both are set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub id_number: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    /// Client-generated employee number (optional)
    #[serde(default)]
    pub employee_number: Option<String>,
}

/// Validated record ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub employee_number: String,
    pub first_name: String,
    pub surname: String,
    pub email: Option<String>,
    pub id_number: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub created_at: i64,
}

/// Response to a successful registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub employee: Employee,
}

/// Response to a successful deletion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reads_both_spellings() {
        let a: EmployeeCreate = serde_json::from_str(
            r#"{"firstName":"Jane","surname":"Doe","idNumber":"123","employeeNumber":"E1"}"#,
        )
        .unwrap();
        assert_eq!(a.first_name.as_deref(), Some("Jane"));
        assert_eq!(a.surname.as_deref(), Some("Doe"));
        assert_eq!(a.employee_number.as_deref(), Some("E1"));

        let b: EmployeeCreate = serde_json::from_str(
            r#"{"name":"Jane","lastName":"Doe","idNumber":"123","email":"j@d.io","department":"Ops"}"#,
        )
        .unwrap();
        assert!(b.first_name.is_none());
        assert_eq!(b.name.as_deref(), Some("Jane"));
        assert_eq!(b.last_name.as_deref(), Some("Doe"));
        assert_eq!(b.department.as_deref(), Some("Ops"));
        assert!(b.employee_number.is_none());
    }

    #[test]
    fn test_create_with_both_spellings_at_once() {
        let c: EmployeeCreate = serde_json::from_str(
            r#"{"firstName":"Jane","name":"J","surname":"Doe","lastName":"D","idNumber":"1"}"#,
        )
        .unwrap();
        assert_eq!(c.first_name.as_deref(), Some("Jane"));
        assert_eq!(c.name.as_deref(), Some("J"));
        assert_eq!(c.surname.as_deref(), Some("Doe"));
        assert_eq!(c.last_name.as_deref(), Some("D"));
    }

    #[test]
    fn test_create_missing_fields_still_parse() {
        let c: EmployeeCreate = serde_json::from_str(r#"{"firstName":"Jane"}"#).unwrap();
        assert!(c.surname.is_none());
        assert!(c.id_number.is_none());
    }

    #[test]
    fn test_employee_wire_format() {
        let employee = Employee {
            id: 7,
            employee_number: "EMP-1A2B3C4D".to_string(),
            first_name: "Jane".to_string(),
            surname: "Doe".to_string(),
            email: None,
            id_number: "123".to_string(),
            position: Some("Engineer".to_string()),
            department: None,
            created_at: 1_700_000_000_000,
        };

        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["employeeNumber"], "EMP-1A2B3C4D");
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["idNumber"], "123");
        assert_eq!(json["timestamp"], 1_700_000_000_000i64);
        assert!(json.get("created_at").is_none());
        assert_eq!(employee.full_name(), "Jane Doe");
    }
}
