//! Bounded snapshot history for undo/redo
//!
//! Every commit stores a full copy of the working buffer. The stack holds at
//! most `capacity` entries; committing at capacity evicts the oldest entry,
//! and committing while the cursor is not at the top truncates the redo tail
//! first (linear undo). The entry at the cursor always equals the buffer
//! currently displayed.

use tracing::debug;

/// Full-buffer snapshot stack with a cursor
pub struct SnapshotHistory {
    entries: Vec<Vec<[u8; 4]>>,
    cursor: usize,
    capacity: usize,
}

impl SnapshotHistory {
    /// Create a history seeded with the initial buffer state
    ///
    /// The seed entry represents "no edits yet" and is pushed immediately
    /// after load, so a fresh session can never underflow on undo.
    pub fn new(capacity: usize, initial: Vec<[u8; 4]>) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// History is seeded at construction and never drains completely
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the entry currently displayed
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The snapshot at the cursor
    pub fn current(&self) -> &[[u8; 4]] {
        &self.entries[self.cursor]
    }

    /// True if a previous entry exists
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// True if a forward entry exists
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Push a snapshot of the buffer after a committed gesture
    ///
    /// Entries after the cursor are discarded first, then the oldest entry is
    /// evicted if the stack is at capacity.
    pub fn commit(&mut self, snapshot: Vec<[u8; 4]>) {
        self.entries.truncate(self.cursor + 1);

        if self.entries.len() >= self.capacity {
            self.entries.remove(0);
            debug!("SnapshotHistory::commit: evicted oldest entry at capacity");
        }

        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;
        debug!(
            "SnapshotHistory::commit: {} entries, cursor {}",
            self.entries.len(),
            self.cursor
        );
    }

    /// Step back one entry, returning the snapshot to display
    ///
    /// No-op returning None when already at the oldest entry.
    pub fn undo(&mut self) -> Option<&[[u8; 4]]> {
        if self.cursor == 0 {
            debug!("SnapshotHistory::undo: already at oldest entry");
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward one entry, returning the snapshot to display
    ///
    /// No-op returning None when already at the newest entry.
    pub fn redo(&mut self) -> Option<&[[u8; 4]]> {
        if self.cursor + 1 >= self.entries.len() {
            debug!("SnapshotHistory::redo: already at newest entry");
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }
}
