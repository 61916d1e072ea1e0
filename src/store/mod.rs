//! Record store for rosterdb
//!
//! Holds the student collection for the lifetime of the process.
//!
//! # Design Principles
//!
//! - Explicit store value, owned by its caller (no statics)
//! - Validate first, mutate second
//! - Linear scan lookups, insertion order preserved
//! - At most one record per id

mod errors;
mod roster;

pub use errors::{StoreError, StoreResult};
pub use roster::RecordStore;
