//! Record id assignment.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Hands out distinct integer ids.
///
/// Seeded from the current Unix time in milliseconds, then advanced by an
/// atomic counter, so two creates in the same millisecond still get
/// different ids.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicI64,
}

impl IdGenerator {
    /// Create a generator seeded from the wall clock
    pub fn new() -> Self {
        Self::starting_at(Utc::now().timestamp_millis())
    }

    /// Create a generator whose first id is `first`
    pub fn starting_at(first: i64) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }

    /// Reserve the next id
    pub fn next_id(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
