//! Student record schema for rosterdb
//!
//! Defines the record type and the field rules enforced before any
//! mutation of the collection.
//!
//! # Design Principles
//!
//! - Every write is validated before it touches the collection
//! - Checks run in a fixed field order, first failure wins
//! - name and id are immutable once a record exists
//! - No coercion beyond integer parsing of typed ages

mod errors;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult, ValidationDetails};
pub use types::{AgeInput, Student};
pub use validator::StudentValidator;
