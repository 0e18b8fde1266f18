// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the reverse search.
//!
//! Every write to the forward-move table or the parent-edge table records the
//! slot and its previous value here. Backtracking pops entries back to the
//! most recent checkpoint, newest first, so a slot written twice during one
//! move attempt ends up with the value it had before the attempt.
//!
//! The pattern itself is never trailed: its only mutation is the three-way
//! swap, which is self-inverse and undone directly by the driver.

use crate::braid::Braid;
use crate::pattern::Cell;

/// A single entry in the trail, recording one table write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailEntry {
    /// A forward-move descriptor slot and its value before the write.
    Braid { cell: Cell, old: Option<Braid> },
    /// A parent-edge marker slot and its value before the write.
    Unbraid { cell: Cell, old: bool },
}

/// The trail: recorded writes plus a stack of nested checkpoints.
///
/// Each open move attempt in the search owns exactly one checkpoint, so the
/// checkpoint depth equals the number of moves currently applied.
#[derive(Debug, Default)]
pub struct Trail {
    /// All trail entries recorded so far
    entries: Vec<TrailEntry>,
    /// Stack of checkpoint indices for nested backtracking
    checkpoints: Vec<usize>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for a search of the given depth.
    ///
    /// Each move attempt records at most twelve writes.
    pub fn with_depth(depth: usize) -> Self {
        Self {
            entries: Vec::with_capacity(12 * depth),
            checkpoints: Vec::with_capacity(depth),
        }
    }

    /// Record a checkpoint for later backtracking.
    ///
    /// Returns the checkpoint index.
    pub fn checkpoint(&mut self) -> usize {
        let checkpoint = self.entries.len();
        self.checkpoints.push(checkpoint);
        checkpoint
    }

    /// Record a table write.
    pub(crate) fn record(&mut self, entry: TrailEntry) {
        self.entries.push(entry);
    }

    /// Rewind to the most recent checkpoint, handing each undone entry to
    /// `restore`, newest first.
    ///
    /// Returns false if there was no checkpoint to rewind to.
    pub fn rewind<F: FnMut(TrailEntry)>(&mut self, mut restore: F) -> bool {
        let Some(checkpoint) = self.checkpoints.pop() else {
            return false;
        };
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                restore(entry);
            }
        }
        true
    }

    /// Entries recorded since the most recent checkpoint, oldest first.
    pub fn entries_since_checkpoint(&self) -> &[TrailEntry] {
        let start = self.checkpoints.last().copied().unwrap_or(0);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the number of active checkpoints.
    pub fn checkpoint_depth(&self) -> usize {
        self.checkpoints.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unbraid(row: usize, col: usize, old: bool) -> TrailEntry {
        TrailEntry::Unbraid {
            cell: Cell::new(row, col),
            old,
        }
    }

    #[test]
    fn test_trail_new() {
        let trail = Trail::new();
        assert_eq!(trail.len(), 0);
        assert_eq!(trail.checkpoint_depth(), 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_checkpoint_and_rewind() {
        let mut trail = Trail::new();

        trail.record(unbraid(0, 0, false));
        trail.record(unbraid(0, 1, true));
        assert_eq!(trail.len(), 2);

        let checkpoint = trail.checkpoint();
        assert_eq!(checkpoint, 2);
        assert_eq!(trail.checkpoint_depth(), 1);

        trail.record(unbraid(1, 0, false));
        trail.record(unbraid(1, 1, true));
        assert_eq!(trail.len(), 4);

        let mut undone = Vec::new();
        assert!(trail.rewind(|entry| undone.push(entry)));
        assert_eq!(undone, vec![unbraid(1, 1, true), unbraid(1, 0, false)]);
        assert_eq!(trail.len(), 2);
        assert_eq!(trail.checkpoint_depth(), 0);
    }

    #[test]
    fn test_nested_checkpoints() {
        let mut trail = Trail::new();

        trail.record(unbraid(0, 0, false));
        let _cp1 = trail.checkpoint();

        trail.record(unbraid(0, 1, false));
        let _cp2 = trail.checkpoint();

        trail.record(unbraid(0, 2, false));
        assert_eq!(trail.len(), 3);
        assert_eq!(trail.checkpoint_depth(), 2);

        assert!(trail.rewind(|_| {}));
        assert_eq!(trail.len(), 2);
        assert_eq!(trail.checkpoint_depth(), 1);

        assert!(trail.rewind(|_| {}));
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.checkpoint_depth(), 0);
    }

    #[test]
    fn test_rewind_empty() {
        let mut trail = Trail::new();
        assert!(!trail.rewind(|_| panic!("nothing to restore")));
    }

    #[test]
    fn test_entries_since_checkpoint() {
        let mut trail = Trail::new();

        trail.record(unbraid(0, 0, false));
        trail.checkpoint();
        trail.record(unbraid(2, 0, true));
        trail.record(unbraid(3, 0, false));

        let entries = trail.entries_since_checkpoint();
        assert_eq!(entries, &[unbraid(2, 0, true), unbraid(3, 0, false)]);
    }
}
