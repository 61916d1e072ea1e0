//! Roster handler
//!
//! Owns the record store and turns each store call into an
//! `OperationResult`, logging one event and bumping one counter per call.

use crate::observability::{log_event_with_fields, Event, MetricsRegistry, MetricsSnapshot};
use crate::schema::{AgeInput, Student};
use crate::store::{RecordStore, StoreError};

use super::response::OperationResult;

/// Entry point for every record operation
#[derive(Debug, Default)]
pub struct RosterHandler {
    store: RecordStore,
    metrics: MetricsRegistry,
}

impl RosterHandler {
    /// Create a handler over an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle add operation
    pub fn add(&mut self, name: &str, id: &str, age: AgeInput, major: &str) -> OperationResult {
        match self.store.add(name, id, age, major) {
            Ok(student) => {
                self.metrics.increment_added();
                log_event_with_fields(Event::RecordAdded, &[("id", id)]);
                OperationResult::with_student(format!("student {} added", student.name), student)
            }
            Err(e) => self.reject("add", &e),
        }
    }

    /// Handle query operation
    pub fn query(&self, id: &str) -> OperationResult {
        match self.store.query_by_id(id) {
            Ok(student) => {
                self.metrics.increment_queried();
                log_event_with_fields(Event::RecordQueried, &[("id", id)]);
                OperationResult::with_student(format!("student {} found", id), student)
            }
            Err(e) => self.reject("query", &e),
        }
    }

    /// Handle update operation
    ///
    /// `None` leaves a field unchanged.
    pub fn update(
        &mut self,
        id: &str,
        age: Option<AgeInput>,
        major: Option<&str>,
    ) -> OperationResult {
        match self.store.update_by_id(id, age, major) {
            Ok(student) => {
                self.metrics.increment_updated();
                log_event_with_fields(Event::RecordUpdated, &[("id", id)]);
                OperationResult::with_student(format!("student {} updated", id), student)
            }
            Err(e) => self.reject("update", &e),
        }
    }

    /// Handle delete operation
    pub fn delete(&mut self, id: &str) -> OperationResult {
        match self.store.delete_by_id(id) {
            Ok(()) => {
                self.metrics.increment_deleted();
                log_event_with_fields(Event::RecordDeleted, &[("id", id)]);
                OperationResult::ok(format!("student {} deleted", id))
            }
            Err(e) => self.reject("delete", &e),
        }
    }

    /// Handle list operation. Never fails.
    pub fn list(&self) -> &[Student] {
        self.metrics.increment_listings();
        let count = self.store.len().to_string();
        log_event_with_fields(Event::RecordsListed, &[("count", count.as_str())]);
        self.store.list_all()
    }

    /// Read-only view of the underlying store
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Current session counters
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    fn reject(&self, op: &str, err: &StoreError) -> OperationResult {
        self.metrics.increment_rejections();
        let message = err.to_string();
        log_event_with_fields(
            Event::OperationRejected,
            &[("op", op), ("code", err.code()), ("reason", message.as_str())],
        );
        OperationResult::from_error(err)
    }
}
