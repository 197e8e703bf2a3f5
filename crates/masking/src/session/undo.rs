//! Undo/redo for the editing session
//!
//! History entries are full-buffer snapshots taken at the end of each
//! committed gesture. Stepping copies the stored snapshot back into the
//! working buffer by value, so later edits never alter stored entries.

use tracing::debug;

use super::EditorSession;

impl EditorSession {
    /// Push a snapshot of the working buffer after a committed gesture
    pub(super) fn commit_history(&mut self) {
        self.history.commit(self.surface.pixels().snapshot());
    }

    /// True if a previous history entry exists
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// True if a forward history entry exists
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step back one history entry
    ///
    /// Returns true if a step was taken; undoing at the oldest entry is a
    /// no-op. Ignored while a gesture is in flight.
    pub fn undo(&mut self) -> bool {
        if !self.is_idle() {
            debug!("undo: ignoring mid-gesture");
            return false;
        }
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.surface.pixels_mut().restore(snapshot);
        true
    }

    /// Step forward one history entry
    ///
    /// Returns true if a step was taken; redoing at the newest entry is a
    /// no-op. Ignored while a gesture is in flight.
    pub fn redo(&mut self) -> bool {
        if !self.is_idle() {
            debug!("redo: ignoring mid-gesture");
            return false;
        }
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.surface.pixels_mut().restore(snapshot);
        true
    }
}
