//! Observable events for rosterdb
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Session
    /// Shell started, menu about to be shown
    SessionStart,
    /// Shell finished (exit choice or end of input)
    SessionEnd,
    /// Configuration resolved
    ConfigLoaded,

    // Record operations
    /// Student added
    RecordAdded,
    /// Student looked up
    RecordQueried,
    /// Student changed
    RecordUpdated,
    /// Student removed
    RecordDeleted,
    /// Collection listed
    RecordsListed,
    /// An operation was rejected by the store
    OperationRejected,

    // Input
    /// Unknown menu choice
    InvalidMenuChoice,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SessionStart => "SESSION_START",
            Event::SessionEnd => "SESSION_END",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::RecordAdded => "RECORD_ADDED",
            Event::RecordQueried => "RECORD_QUERIED",
            Event::RecordUpdated => "RECORD_UPDATED",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::RecordsListed => "RECORDS_LISTED",
            Event::OperationRejected => "OPERATION_REJECTED",
            Event::InvalidMenuChoice => "INVALID_MENU_CHOICE",
        }
    }

    /// Returns true if this event reports input that was turned away
    pub fn is_rejection(&self) -> bool {
        matches!(self, Event::OperationRejected | Event::InvalidMenuChoice)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
