//! Operation layer for rosterdb
//!
//! Sits between the shell and the record store.
//!
//! # Design Principles
//!
//! - One handler call per user action
//! - Store errors become structured results, never panics
//! - Error codes passed through unchanged
//! - Each call is logged and counted
//!
//! # Supported Operations
//!
//! - add
//! - query
//! - update
//! - delete
//! - list

mod handler;
mod response;

pub use handler::RosterHandler;
pub use response::OperationResult;
