// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use weaving_patterns::engine::enumerate;
use weaving_patterns::output::Collector;
use weaving_patterns::Pattern;

/// Known pattern counts, indexed by `n - 2`.
pub const KNOWN_COUNTS: [u64; 7] = [1, 2, 8, 62, 908, 24698, 1232944];

/// Every pattern on `n` strands, in emission order.
pub fn all_patterns(n: usize) -> Vec<Pattern> {
    let mut collector = Collector::new();
    enumerate(n, &mut collector).expect("enumeration failed");
    collector.into_patterns()
}

/// C(n, 3): the number of braid moves separating the initial pattern from
/// its full reversal.
pub fn triples(n: usize) -> usize {
    n * (n - 1) * (n - 2) / 6
}
