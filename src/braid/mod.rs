// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Braid moves and the two move tables.
//!
//! A braid move swaps the adjacent pair at three cells of a pattern at once.
//! It is stored in the forward-move table at one of its cells, `z`, and lists
//! the other two as companions `x` and `y`. The parent-edge table holds one
//! flag per slot marking moves that lead back towards the parent pattern.
//!
//! Both tables are `n` rows by `n - 2` columns: a braid at column `c` swaps
//! columns `c` and `c + 1`, and the last pattern column cannot start a swap.

pub mod catalog;

use crate::pattern::{Cell, Pattern};

/// Companion cells of a forward move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Braid {
    pub x: Cell,
    pub y: Cell,
}

impl Braid {
    pub const fn new(x: Cell, y: Cell) -> Self {
        Self { x, y }
    }
}

/// A braid together with the cell it is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub z: Cell,
    pub braid: Braid,
}

impl Move {
    pub const fn new(z: Cell, braid: Braid) -> Self {
        Self { z, braid }
    }

    /// Swap the adjacent pairs at `x`, `y` and `z`.
    ///
    /// Applying the same move twice restores the pattern.
    pub fn apply(&self, pattern: &mut Pattern) {
        pattern.swap_adjacent(self.braid.x);
        pattern.swap_adjacent(self.braid.y);
        pattern.swap_adjacent(self.z);
    }
}

/// A fixed-shape table of move bookkeeping, one slot per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<T> {
    rows: usize,
    cols: usize,
    slots: Vec<T>,
}

/// Forward-move descriptors.
pub type BraidTable = Table<Option<Braid>>;

/// Parent-edge markers.
pub type UnbraidTable = Table<bool>;

impl<T: Copy + Default> Table<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            slots: vec![T::default(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, cell: Cell) -> T {
        self.slots[self.index(cell)]
    }

    /// Store `value` at `cell`, returning the previous value.
    pub fn replace(&mut self, cell: Cell, value: T) -> T {
        let index = self.index(cell);
        std::mem::replace(&mut self.slots[index], value)
    }

    /// Cells in search order: rows from the top down, columns left to right.
    pub fn scan_order(&self) -> impl Iterator<Item = Cell> {
        let cols = self.cols;
        (0..self.rows)
            .rev()
            .flat_map(move |row| (0..cols).map(move |col| Cell::new(row, col)))
    }

    /// The cell at `position` in search order.
    fn scan_cell(&self, position: usize) -> Cell {
        Cell::new(self.rows - 1 - position / self.cols, position % self.cols)
    }

    fn index(&self, cell: Cell) -> usize {
        debug_assert!(cell.row < self.rows && cell.col < self.cols, "{:?} outside table", cell);
        cell.row * self.cols + cell.col
    }
}

impl Table<Option<Braid>> {
    /// The move stored at `cell`, if any.
    pub fn move_at(&self, cell: Cell) -> Option<Move> {
        self.get(cell).map(|braid| Move::new(cell, braid))
    }

    /// The first move at or after `from` in search order.
    ///
    /// `from` is a position in [`Table::scan_order`]; returns the move and
    /// its position.
    pub fn next_move(&self, from: usize) -> Option<(usize, Move)> {
        (from..self.slots.len()).find_map(|position| {
            let cell = self.scan_cell(position);
            self.move_at(cell).map(|mv| (position, mv))
        })
    }

    pub fn count_moves(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

impl Table<bool> {
    /// The first marked cell in search order.
    pub fn first_marked(&self) -> Option<Cell> {
        self.scan_order().find(|&cell| self.get(cell))
    }
}
