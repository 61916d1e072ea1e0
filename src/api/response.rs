//! Operation result type
//!
//! Every handler call returns one of these instead of an error, so the
//! shell only ever has to render it.

use serde::Serialize;

use crate::schema::Student;
use crate::store::StoreError;

/// Structured outcome of a record operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    pub success: bool,
    pub message: String,
    /// Stable error code, only set on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<Student>,
}

impl OperationResult {
    /// Create a success result carrying a record
    pub fn with_student(message: impl Into<String>, student: Student) -> Self {
        Self {
            success: true,
            message: message.into(),
            code: None,
            student: Some(student),
        }
    }

    /// Create a success result with no payload
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            code: None,
            student: None,
        }
    }

    /// Create from a store error
    pub fn from_error(err: &StoreError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
            code: Some(err.code()),
            student: None,
        }
    }
}
