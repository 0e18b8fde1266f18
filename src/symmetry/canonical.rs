// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonicality checking for weaving patterns under dihedral symmetry.

use super::dihedral_images;
use crate::pattern::Pattern;

/// Result of symmetry checking for a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryType {
    /// Pattern is the unique largest image (uniquely canonical).
    Canonical,
    /// Pattern is tied for largest image (has a non-trivial symmetry).
    Equivocal,
    /// Pattern is not the largest image (reject - not canonical).
    NonCanonical,
}

/// Check whether a pattern is canonical under the dihedral group.
///
/// Algorithm:
/// 1. List all 4n images (see [`dihedral_images`])
/// 2. Find the largest in row-major lexicographic order and count ties
/// 3. Compare input with maximum:
///    - If input != max → NonCanonical (reject)
///    - If input == max, attained more than once → Equivocal (accept, has symmetry)
///    - Otherwise → Canonical (accept)
///
/// Since `rotate` has order 2n for n ≥ 4 but only 2 for n = 3, every
/// representative for 3 strands is Equivocal.
pub fn check_symmetry(pattern: &Pattern) -> SymmetryType {
    let images = dihedral_images(pattern);
    let mut max_image = pattern;
    let mut max_count = 0;
    for image in &images {
        match image.cmp(max_image) {
            std::cmp::Ordering::Greater => {
                max_image = image;
                max_count = 1;
            }
            std::cmp::Ordering::Equal => {
                max_count += 1;
            }
            std::cmp::Ordering::Less => {}
        }
    }

    if pattern != max_image {
        return SymmetryType::NonCanonical;
    }
    if max_count > 1 {
        return SymmetryType::Equivocal;
    }
    SymmetryType::Canonical
}

/// The orbit representative of `pattern`: its largest dihedral image.
pub fn canonical_form(pattern: &Pattern) -> Pattern {
    dihedral_images(pattern)
        .into_iter()
        .max()
        .unwrap_or_else(|| pattern.clone())
}
