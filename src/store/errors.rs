//! Record store errors
//!
//! Error codes:
//! - ROSTER_VALIDATION_FAILED: a field failed its rule
//! - ROSTER_DUPLICATE_ID: add with an id already present
//! - ROSTER_NOT_FOUND: query/update/delete of an absent id
//!
//! None of these are fatal. The collection is unchanged whenever one is
//! returned.

use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A supplied field failed validation
    #[error("{0}")]
    Validation(#[from] SchemaError),

    /// Another record already uses this id
    #[error("student id {id} already exists")]
    DuplicateKey { id: String },

    /// No record has this id
    #[error("no student found with id {id}")]
    NotFound { id: String },
}

impl StoreError {
    pub fn duplicate_key(id: impl Into<String>) -> Self {
        StoreError::DuplicateKey { id: id.into() }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Validation(e) => e.code().code(),
            StoreError::DuplicateKey { .. } => "ROSTER_DUPLICATE_ID",
            StoreError::NotFound { .. } => "ROSTER_NOT_FOUND",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }

    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, StoreError::DuplicateKey { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
