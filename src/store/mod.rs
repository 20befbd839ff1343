//! # In-Memory Store
//!
//! Process-memory record collections backing the course and video APIs.
//! Nothing is persisted; a restart starts from an empty (or seeded) state.
//!
//! Each collection keeps insertion order and is guarded by its own lock,
//! so one request's read-modify-write never interleaves with another's.

mod errors;
mod ids;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use ids::IdGenerator;
pub use memory::{InMemoryStore, Record, RecordStore};

/// Parse an id path segment. Anything that is not an integer yields `None`,
/// which callers treat the same as an unknown id.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
