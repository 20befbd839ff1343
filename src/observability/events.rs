//! Observable events
//!
//! Every log line names one of these. Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events in videohub
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration resolved, server about to bind
    ServerStart,
    /// Listener bound, serving requests
    ServerListening,
    /// Graceful shutdown finished
    ServerStopped,

    // Requests
    /// A request was answered
    RequestComplete,

    // Store mutations
    /// A record was inserted
    RecordCreated,
    /// A record was updated or replaced
    RecordUpdated,
    /// A record was removed
    RecordDeleted,
    /// A whole collection was wiped
    StoreCleared,
    /// A store operation failed
    StoreFailure,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ServerStart => "SERVER_START",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ServerStopped => "SERVER_STOPPED",
            Event::RequestComplete => "REQUEST_COMPLETE",
            Event::RecordCreated => "RECORD_CREATED",
            Event::RecordUpdated => "RECORD_UPDATED",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::StoreCleared => "STORE_CLEARED",
            Event::StoreFailure => "STORE_FAILURE",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::RequestComplete => Severity::Trace,
            Event::StoreFailure => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
