//! Process-wide monotonic counters, one per entity kind.

use std::sync::atomic::{AtomicU64, Ordering};

use super::EntityKind;

/// One atomic counter per [`EntityKind`].
///
/// Created once per batch run and never reset; safe to share between
/// worker threads.
#[derive(Debug, Default)]
pub struct CounterRegistry {
    counters: [AtomicU64; EntityKind::ALL.len()],
}

impl CounterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the current value for `kind` and advance it.
    pub fn next(&self, kind: EntityKind) -> u64 {
        self.counters[kind.index()].fetch_add(1, Ordering::Relaxed)
    }
}
