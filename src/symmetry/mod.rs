// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rotations and reflections of weaving patterns.
//!
//! These are utilities for folding symmetric duplicates after enumeration;
//! the search itself never uses them.
//!
//! `reflect` is an involution. `rotate` has order `2n`: applying it `n` times
//! reverses every row, and `reflect ∘ rotate ∘ reflect = rotate⁻¹`, so the
//! two generate a dihedral group of order `4n`.
//!
//! ## Module Structure
//!
//! - `canonical`: Canonicality checking under the dihedral group
//! - `mod`: The generators and the list of images

pub mod canonical;

pub use canonical::{canonical_form, check_symmetry, SymmetryType};

use crate::pattern::Pattern;

/// Advance every strand label by one, cyclically.
///
/// Row `i + 1` becomes row `i` with each label decremented modulo `n`; the
/// last row is row 0 reversed, decremented.
pub fn rotate(pattern: &Pattern) -> Pattern {
    let n = pattern.strands();
    let shift = |label: &u8| ((*label as usize + n - 1) % n) as u8;
    let mut values = Vec::with_capacity(n * pattern.width());
    for row in 1..n {
        values.extend(pattern.row(row).iter().map(shift));
    }
    values.extend(pattern.row(0).iter().rev().map(shift));
    Pattern::from_raw(n, values)
}

/// Mirror image: row `i` becomes row `n - 1 - i` with every label complemented.
pub fn reflect(pattern: &Pattern) -> Pattern {
    let n = pattern.strands();
    let mut values = Vec::with_capacity(n * pattern.width());
    for row in (0..n).rev() {
        values.extend(pattern.row(row).iter().map(|&label| (n - 1 - label as usize) as u8));
    }
    Pattern::from_raw(n, values)
}

/// All `4n` images of `pattern` under the dihedral group, with repetition.
///
/// The first `2n` are the rotations `rotate^k`, `k` in `0..2n`, starting with
/// the pattern itself; the next `2n` are their reflections in the same order.
pub fn dihedral_images(pattern: &Pattern) -> Vec<Pattern> {
    let order = 2 * pattern.strands();
    let mut rotations = Vec::with_capacity(2 * order);
    let mut current = pattern.clone();
    for _ in 0..order {
        let next = rotate(&current);
        rotations.push(std::mem::replace(&mut current, next));
    }
    let reflections: Vec<Pattern> = rotations.iter().map(reflect).collect();
    rotations.extend(reflections);
    rotations
}
