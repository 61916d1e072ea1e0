//! Validation error types for student records
//!
//! Error codes:
//! - ROSTER_VALIDATION_FAILED
//!
//! A validation failure never mutates the collection and never ends the
//! session; the shell reports it and returns to the menu.

use std::fmt;

/// Schema-specific error codes, surfaced through `StoreError::code`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// A field failed its type, presence or range rule
    RosterValidationFailed,
}

impl SchemaErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::RosterValidationFailed => "ROSTER_VALIDATION_FAILED",
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Validation failure details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDetails {
    /// Field name (e.g., "age")
    pub field: String,
    /// Expected type or condition
    pub expected: String,
    /// Actual value or type found
    pub actual: String,
}

impl ValidationDetails {
    pub fn empty_text(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: "non-empty string".into(),
            actual: "empty string".into(),
        }
    }

    pub fn not_a_number(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: "number".into(),
            actual: "not a number".into(),
        }
    }

    pub fn out_of_range(
        field: impl Into<String>,
        expected: impl Into<String>,
        value: i64,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: value.to_string(),
        }
    }
}

impl fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// Schema error type with full context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    /// Error code
    code: SchemaErrorCode,
    /// Human-readable message shown to the user
    message: String,
    /// What exactly failed
    details: ValidationDetails,
}

impl SchemaError {
    /// Create a validation failed error with a user-facing reason
    pub fn validation_failed(message: impl Into<String>, details: ValidationDetails) -> Self {
        Self {
            code: SchemaErrorCode::RosterValidationFailed,
            message: message.into(),
            details,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the name of the offending field
    pub fn field(&self) -> &str {
        &self.details.field
    }

    /// Returns validation details
    pub fn details(&self) -> &ValidationDetails {
        &self.details
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
