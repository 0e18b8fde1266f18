// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parent-edge check of the reverse search.
//!
//! Every pattern other than the starting one has exactly one canonical parent
//! edge: the first marked slot of the parent-edge table in search order. A
//! move is followed only if it is that edge; any other way of reaching the
//! same pattern is rejected, so each pattern is visited exactly once.

use crate::braid::UnbraidTable;
use crate::pattern::Cell;

/// Whether the move just applied at `cell` is the canonical parent edge.
///
/// Expects `cell` itself to have been marked by the move catalog.
pub fn is_parent_edge(unbraids: &UnbraidTable, cell: Cell) -> bool {
    unbraids.first_marked() == Some(cell)
}
