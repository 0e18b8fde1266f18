// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context: the live pattern, both move tables, the trail and the
//! statistics of one enumeration run.
//!
//! There is exactly one mutable pattern per run. Ancestors and siblings in the
//! search tree exist only as mutate/undo pairs applied to this context.
//!
//! # Trail Safety
//!
//! Table writes are only possible through [`SearchContext::set_braid`] and
//! [`SearchContext::set_unbraid`], which record the old value first, so
//! [`SearchContext::rewind`] always restores the tables verbatim.

use crate::braid::{Braid, BraidTable, Move, UnbraidTable};
use crate::errors::Result;
use crate::pattern::{Cell, Pattern};
use crate::state::statistics::Statistics;
use crate::trail::{Trail, TrailEntry};

#[derive(Debug)]
pub struct SearchContext {
    pattern: Pattern,
    braids: BraidTable,
    unbraids: UnbraidTable,
    /// Trail for O(1) backtracking of table writes
    pub trail: Trail,
    pub statistics: Statistics,
}

impl SearchContext {
    /// Build the starting state for `n` strands.
    ///
    /// The pattern is [`Pattern::initial`]. For every row `z >= 2` the move
    /// at `(z, z - 2)` swaps columns `z - 2` of rows `z - 2`, `z - 1` and `z`;
    /// these are the only moves available from the starting pattern. No
    /// parent-edge markers are set.
    pub fn new(n: usize) -> Result<Self> {
        let pattern = Pattern::initial(n)?;
        let mut braids = BraidTable::new(n, n - 2);
        for z in 2..n {
            let braid = Braid::new(Cell::new(z - 2, z - 2), Cell::new(z - 1, z - 2));
            braids.replace(Cell::new(z, z - 2), Some(braid));
        }
        // Every path through the search applies at most C(n, 3) moves.
        let depth = n * (n - 1) * (n - 2) / 6;
        Ok(Self {
            pattern,
            braids,
            unbraids: UnbraidTable::new(n, n - 2),
            trail: Trail::with_depth(depth),
            statistics: Statistics::new(),
        })
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn braids(&self) -> &BraidTable {
        &self.braids
    }

    pub fn unbraids(&self) -> &UnbraidTable {
        &self.unbraids
    }

    pub fn strands(&self) -> usize {
        self.pattern.strands()
    }

    /// Perform the three-way swap of `mv` on the live pattern.
    pub(crate) fn swap(&mut self, mv: &Move) {
        mv.apply(&mut self.pattern);
    }

    /// Write a forward-move slot (trail-tracked).
    pub(crate) fn set_braid(&mut self, cell: Cell, braid: Option<Braid>) {
        let old = self.braids.replace(cell, braid);
        self.trail.record(TrailEntry::Braid { cell, old });
    }

    /// Write a parent-edge slot (trail-tracked).
    pub(crate) fn set_unbraid(&mut self, cell: Cell, marked: bool) {
        let old = self.unbraids.replace(cell, marked);
        self.trail.record(TrailEntry::Unbraid { cell, old });
    }

    /// Record a checkpoint before a move attempt.
    pub(crate) fn checkpoint(&mut self) -> usize {
        self.trail.checkpoint()
    }

    /// Undo every table write since the last checkpoint.
    pub(crate) fn rewind(&mut self) -> bool {
        let braids = &mut self.braids;
        let unbraids = &mut self.unbraids;
        self.trail.rewind(|entry| match entry {
            TrailEntry::Braid { cell, old } => {
                braids.replace(cell, old);
            }
            TrailEntry::Unbraid { cell, old } => {
                unbraids.replace(cell, old);
            }
        })
    }
}
