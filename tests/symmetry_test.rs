// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dihedral symmetry of the enumerated pattern sets.

mod common;

use std::collections::{BTreeSet, HashSet};

use common::all_patterns;
use proptest::prelude::*;
use weaving_patterns::output::{Collector, SymmetryFilter};
use weaving_patterns::symmetry::{
    canonical_form, check_symmetry, dihedral_images, reflect, rotate, SymmetryType,
};
use weaving_patterns::{enumerate, Pattern};

fn rotate_times(pattern: &Pattern, times: usize) -> Pattern {
    (0..times).fold(pattern.clone(), |p, _| rotate(&p))
}

/// Pick the pattern of size `n` at `index`, wrapping around.
fn sample(n: usize, index: usize) -> Pattern {
    let patterns = all_patterns(n);
    patterns[index % patterns.len()].clone()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_reflect_is_involution(n in 3usize..=6, index in any::<usize>()) {
        let pattern = sample(n, index);
        prop_assert_eq!(reflect(&reflect(&pattern)), pattern);
    }

    #[test]
    fn prop_rotate_has_order_two_n(n in 3usize..=6, index in any::<usize>()) {
        let pattern = sample(n, index);
        prop_assert_eq!(rotate_times(&pattern, 2 * n), pattern);
    }

    #[test]
    fn prop_rotate_n_reverses_rows(n in 3usize..=6, index in any::<usize>()) {
        let pattern = sample(n, index);
        let turned = rotate_times(&pattern, n);
        for row in 0..n {
            let mut reversed = pattern.row(row).to_vec();
            reversed.reverse();
            prop_assert_eq!(turned.row(row), reversed.as_slice());
        }
    }

    #[test]
    fn prop_images_are_valid(n in 3usize..=6, index in any::<usize>()) {
        let pattern = sample(n, index);
        for image in dihedral_images(&pattern) {
            prop_assert!(image.check_invariant().is_ok());
        }
        prop_assert_eq!(reflect(&rotate(&reflect(&pattern))), rotate_times(&pattern, 2 * n - 1));
    }
}

#[test]
fn test_pattern_sets_closed_under_symmetry() {
    for n in 3..=6 {
        let patterns = all_patterns(n);
        let set: HashSet<&Pattern> = patterns.iter().collect();
        for pattern in &patterns {
            assert!(set.contains(&rotate(pattern)), "rotation escapes for n = {}", n);
            assert!(set.contains(&reflect(pattern)), "reflection escapes for n = {}", n);
        }
    }
}

#[test]
fn test_orbit_counts() {
    for (n, expected) in [(3, 1), (4, 1), (5, 6), (6, 43)] {
        let orbits: BTreeSet<Pattern> = all_patterns(n).iter().map(canonical_form).collect();
        assert_eq!(orbits.len(), expected, "n = {}", n);
    }
}

#[test]
fn test_one_representative_per_orbit() {
    for n in 3..=6 {
        let patterns = all_patterns(n);
        let representatives: Vec<&Pattern> = patterns
            .iter()
            .filter(|p| check_symmetry(p) != SymmetryType::NonCanonical)
            .collect();
        let forms: BTreeSet<Pattern> = patterns.iter().map(canonical_form).collect();
        assert_eq!(representatives.len(), forms.len(), "n = {}", n);
        for representative in representatives {
            assert!(forms.contains(representative));
        }
    }
}

#[test]
fn test_symmetry_filter_split_for_six() {
    let mut filter = SymmetryFilter::new(Collector::new());
    enumerate(6, &mut filter).unwrap();
    assert_eq!(filter.canonical(), 34);
    assert_eq!(filter.equivocal(), 9);
    assert_eq!(filter.skipped(), 908 - 43);
    assert_eq!(filter.into_inner().patterns.len(), 43);
}
