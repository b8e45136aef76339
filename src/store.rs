//! Last-request-wins collection store.
//!
//! Loads are not cancelled or de-duplicated: a rapid sequence of reload
//! triggers can complete out of order. Each load takes a monotonically
//! increasing ticket before the fetch starts, and only the newest ticket is
//! allowed to commit; stale completions are dropped instead of clobbering
//! fresher rows.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use tracing::debug;

/// Handle identifying one in-flight load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

struct Committed<T> {
    seq: u64,
    rows: Vec<T>,
}

/// Holds the current rows of one collection view.
pub struct CollectionStore<T> {
    next_seq: AtomicU64,
    committed: RwLock<Committed<T>>,
}

impl<T> Default for CollectionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CollectionStore<T> {
    pub fn new() -> Self {
        Self {
            next_seq: AtomicU64::new(1),
            committed: RwLock::new(Committed {
                seq: 0,
                rows: Vec::new(),
            }),
        }
    }

    /// Registers a new load. Call before starting the fetch so a later
    /// trigger always outranks an earlier one.
    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.next_seq.fetch_add(1, Ordering::Relaxed))
    }

    /// Commits the rows of a finished load. Returns false (and drops the
    /// rows) when a newer load already committed.
    pub fn commit(&self, ticket: LoadTicket, rows: Vec<T>) -> bool {
        let mut committed = self.committed.write().unwrap_or_else(|e| e.into_inner());
        if ticket.0 <= committed.seq {
            debug!(
                ticket = ticket.0,
                committed = committed.seq,
                "dropping stale load"
            );
            return false;
        }
        committed.seq = ticket.0;
        committed.rows = rows;
        true
    }

    /// Empties the store, e.g. on navigation away from the view.
    pub fn clear(&self) {
        let mut committed = self.committed.write().unwrap_or_else(|e| e.into_inner());
        committed.rows = Vec::new();
    }

    pub fn len(&self) -> usize {
        self.committed
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .rows
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> CollectionStore<T> {
    /// Snapshot of the committed rows.
    pub fn rows(&self) -> Vec<T> {
        self.committed
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .rows
            .clone()
    }
}
