//! Session counters for rosterdb
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters for every handler operation in a session
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Successful adds
    records_added: AtomicU64,
    /// Successful lookups
    records_queried: AtomicU64,
    /// Successful updates
    records_updated: AtomicU64,
    /// Successful deletes
    records_deleted: AtomicU64,
    /// Listings served
    listings: AtomicU64,
    /// Operations the store turned away
    rejections: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_added(&self) {
        self.records_added.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_queried(&self) {
        self.records_queried.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_updated(&self) {
        self.records_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deleted(&self) {
        self.records_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_listings(&self) {
        self.listings.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rejections(&self) {
        self.rejections.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            added: self.records_added.load(Ordering::Relaxed),
            queried: self.records_queried.load(Ordering::Relaxed),
            updated: self.records_updated.load(Ordering::Relaxed),
            deleted: self.records_deleted.load(Ordering::Relaxed),
            listings: self.listings.load(Ordering::Relaxed),
            rejections: self.rejections.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub added: u64,
    pub queried: u64,
    pub updated: u64,
    pub deleted: u64,
    pub listings: u64,
    pub rejections: u64,
}

impl MetricsSnapshot {
    /// Counters as string pairs, ready for `Logger` fields
    pub fn as_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("added", self.added.to_string()),
            ("deleted", self.deleted.to_string()),
            ("listings", self.listings.to_string()),
            ("queried", self.queried.to_string()),
            ("rejections", self.rejections.to_string()),
            ("updated", self.updated.to_string()),
        ]
    }
}
