//! Observability for videohub
//!
//! Structured JSON logging with a fixed catalogue of lifecycle events.
//!
//! # Usage
//!
//! ```ignore
//! use videohub::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::RecordCreated, &[("collection", "videos"), ("id", "42")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
