//! rosterdb - an interactive, in-memory student roster
//!
//! Layers, bottom up:
//! - schema: record type and field rules
//! - store: the collection and its operations
//! - api: structured results over the store
//! - observability: JSON-line logging and counters
//! - cli: arguments, configuration and the menu shell

pub mod api;
pub mod cli;
pub mod observability;
pub mod schema;
pub mod store;
