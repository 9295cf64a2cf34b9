//! Undo/redo history as a stack of full drawing snapshots.
//!
//! The stack always holds at least one snapshot, and the cursor always points
//! at the snapshot equal to the live drawing. A new commit truncates whatever
//! could have been redone before appending; undo and redo only move the
//! cursor, so `undo` followed by `redo` is always observably a no-op.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::doc::Drawing;

/// Snapshot stack plus cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    snapshots: Vec<Drawing>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

// The stack is never empty, so there is no `is_empty` to pair with `len`.
#[allow(clippy::len_without_is_empty)]
impl History {
    /// A history holding only the empty drawing, at cursor 0.
    #[must_use]
    pub fn new() -> Self {
        Self { snapshots: vec![Drawing::new()], cursor: 0 }
    }

    /// The snapshot under the cursor.
    #[must_use]
    pub fn current(&self) -> &Drawing {
        // The stack is never empty and `cursor` never exceeds its last index.
        &self.snapshots[self.cursor]
    }

    /// Drop everything after the cursor, append `drawing`, and move the
    /// cursor onto it.
    pub fn commit(&mut self, drawing: Drawing) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(drawing);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Step back one snapshot. At the oldest snapshot this does nothing.
    pub fn undo(&mut self) -> &Drawing {
        if self.can_undo() {
            self.cursor -= 1;
        }
        self.current()
    }

    /// Step forward one snapshot. At the newest snapshot this does nothing.
    pub fn redo(&mut self) -> &Drawing {
        if self.can_redo() {
            self.cursor += 1;
        }
        self.current()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of snapshots on the stack, including the initial empty one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Index of the snapshot under the cursor.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Forget everything and return to the single empty snapshot.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
