//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// In-memory store errors
///
/// Missing records are not errors here; lookups return `Option`/`bool`
/// and the caller decides what absence means.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A writer panicked while holding the collection lock
    #[error("Store '{0}' is unavailable: lock poisoned")]
    LockPoisoned(&'static str),
}
