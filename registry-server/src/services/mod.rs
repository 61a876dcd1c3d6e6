//! Business services
//!
//! - [`employee_number`] - employee number generation strategies
//! - [`registration`] - parse, validate and persist new hires

pub mod employee_number;
pub mod registration;

pub use employee_number::{EmployeeNumberGenerator, NumberStrategy};
pub use registration::{Registration, RegistrationService};
