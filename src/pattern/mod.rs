// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Weaving patterns: the n×(n-1) grid of strand labels.
//!
//! Row `i` of a pattern lists every strand label except `i`, each exactly
//! once. The search engine keeps one live pattern and mutates it in place by
//! swapping adjacent pairs; every swap it makes is undone on backtrack.
//!
//! Labels are 0-based internally and 1-based in the text form (see [`text`]).

pub mod text;

pub use text::parse_patterns;

use crate::errors::{Result, WeaveError};

/// Smallest supported number of strands.
pub const MIN_STRANDS: usize = 2;

/// Largest supported number of strands.
///
/// Labels are stored as `u8` and the invariant check uses a 64-bit mask.
pub const MAX_STRANDS: usize = 64;

/// A (row, column) coordinate in a pattern or in one of the move tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One weaving pattern.
///
/// Ordering is row-major lexicographic over the labels, which is what the
/// symmetry module uses to pick orbit representatives.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern {
    strands: usize,
    /// Row-major, `strands` rows of `strands - 1` labels.
    values: Vec<u8>,
}

impl Pattern {
    /// Check that `n` strands is a supported size.
    pub fn check_size(n: usize) -> Result<()> {
        if (MIN_STRANDS..=MAX_STRANDS).contains(&n) {
            Ok(())
        } else {
            Err(WeaveError::InvalidSize {
                n,
                min: MIN_STRANDS,
                max: MAX_STRANDS,
            })
        }
    }

    /// The canonical starting pattern: row `i` is every label except `i`, ascending.
    pub fn initial(n: usize) -> Result<Self> {
        Self::check_size(n)?;
        let values = (0..n)
            .flat_map(|i| (0..n).filter(move |&j| j != i))
            .map(|j| j as u8)
            .collect();
        Ok(Self { strands: n, values })
    }

    /// Build a pattern from explicit rows, validating shape and invariant.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        Self::check_size(n)?;
        let mut values = Vec::with_capacity(n * (n - 1));
        for (row, labels) in rows.iter().enumerate() {
            let labels = labels.as_ref();
            if labels.len() != n - 1 {
                return Err(WeaveError::BrokenInvariant {
                    row,
                    values: labels.to_vec(),
                });
            }
            values.extend_from_slice(labels);
        }
        let pattern = Self { strands: n, values };
        pattern.check_invariant()?;
        Ok(pattern)
    }

    /// Assemble a pattern from raw row-major values without validation.
    pub(crate) fn from_raw(strands: usize, values: Vec<u8>) -> Self {
        debug_assert_eq!(values.len(), strands * (strands - 1));
        Self { strands, values }
    }

    /// Number of strands `n` (also the number of rows).
    pub fn strands(&self) -> usize {
        self.strands
    }

    /// Number of columns, `n - 1`.
    pub fn width(&self) -> usize {
        self.strands - 1
    }

    pub fn row(&self, row: usize) -> &[u8] {
        let width = self.width();
        &self.values[row * width..(row + 1) * width]
    }

    /// Rows in index order, row 0 first.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.values.chunks(self.width())
    }

    /// Label at `(row, col)`, as an index.
    pub fn value(&self, row: usize, col: usize) -> usize {
        self.values[row * self.width() + col] as usize
    }

    pub fn get(&self, cell: Cell) -> usize {
        self.value(cell.row, cell.col)
    }

    /// Column at which `label` appears in `row`.
    ///
    /// Returns `None` only for `label == row`, which never appears.
    pub fn position_of(&self, row: usize, label: usize) -> Option<usize> {
        self.row(row).iter().position(|&v| v as usize == label)
    }

    /// Swap the labels at `cell` and the cell to its right.
    pub fn swap_adjacent(&mut self, cell: Cell) {
        let index = cell.row * self.width() + cell.col;
        self.values.swap(index, index + 1);
    }

    /// Verify that each row `i` is a permutation of `{0..n} \ {i}`.
    pub fn check_invariant(&self) -> Result<()> {
        for (row, labels) in self.rows().enumerate() {
            let mut seen = 0u64;
            for &label in labels {
                let label = label as usize;
                let bit = 1u64 << (label % 64);
                if label >= self.strands || label == row || seen & bit != 0 {
                    return Err(WeaveError::BrokenInvariant {
                        row,
                        values: labels.to_vec(),
                    });
                }
                seen |= bit;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_three_strands() {
        let pattern = Pattern::initial(3).unwrap();
        assert_eq!(pattern.strands(), 3);
        assert_eq!(pattern.width(), 2);
        assert_eq!(pattern.row(0), &[1, 2]);
        assert_eq!(pattern.row(1), &[0, 2]);
        assert_eq!(pattern.row(2), &[0, 1]);
    }

    #[test]
    fn test_initial_rows_skip_own_label() {
        let pattern = Pattern::initial(6).unwrap();
        for (i, row) in pattern.rows().enumerate() {
            let expected: Vec<u8> = (0..6u8).filter(|&j| j as usize != i).collect();
            assert_eq!(row, expected.as_slice());
        }
        assert!(pattern.check_invariant().is_ok());
    }

    #[test]
    fn test_size_limits() {
        assert!(matches!(
            Pattern::initial(1),
            Err(WeaveError::InvalidSize { n: 1, .. })
        ));
        assert!(matches!(
            Pattern::initial(MAX_STRANDS + 1),
            Err(WeaveError::InvalidSize { .. })
        ));
        assert!(Pattern::initial(MIN_STRANDS).is_ok());
        assert!(Pattern::initial(MAX_STRANDS).is_ok());
    }

    #[test]
    fn test_position_of() {
        let pattern = Pattern::initial(4).unwrap();
        assert_eq!(pattern.position_of(2, 3), Some(2));
        assert_eq!(pattern.position_of(2, 0), Some(0));
        assert_eq!(pattern.position_of(2, 2), None);
    }

    #[test]
    fn test_swap_adjacent_twice_is_identity() {
        let original = Pattern::initial(5).unwrap();
        let mut pattern = original.clone();
        pattern.swap_adjacent(Cell::new(3, 1));
        assert_eq!(pattern.row(3), &[0, 2, 1, 4]);
        pattern.swap_adjacent(Cell::new(3, 1));
        assert_eq!(pattern, original);
    }

    #[test]
    fn test_from_rows_rejects_broken_rows() {
        assert!(Pattern::from_rows(&[vec![1u8, 2], vec![0, 2], vec![1, 0]]).is_ok());

        let err = Pattern::from_rows(&[vec![1u8, 2], vec![1, 2], vec![0, 1]]).unwrap_err();
        assert!(matches!(err, WeaveError::BrokenInvariant { row: 1, .. }));

        let err = Pattern::from_rows(&[vec![1u8, 1], vec![0, 2], vec![0, 1]]).unwrap_err();
        assert!(matches!(err, WeaveError::BrokenInvariant { row: 0, .. }));

        let err = Pattern::from_rows(&[vec![1u8, 3], vec![0, 2], vec![0, 1]]).unwrap_err();
        assert!(matches!(err, WeaveError::BrokenInvariant { row: 0, .. }));

        let err = Pattern::from_rows(&[vec![1u8], vec![0, 2], vec![0, 1]]).unwrap_err();
        assert!(matches!(err, WeaveError::BrokenInvariant { row: 0, .. }));
    }
}
