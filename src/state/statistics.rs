// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented by the driver as it
//! walks the search tree.

use std::fmt;

use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, IntoStaticStr};

#[derive(Debug, EnumCountMacro, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Patterns handed to the sink.
    PatternsEmitted,
    /// Moves swapped in, whether or not they were followed.
    MovesTried,
    /// Moves rejected by the parent-edge check.
    MovesRejected,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
    max_depth: usize,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Note that the search reached `depth` applied moves.
    pub(crate) fn reached_depth(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Largest number of moves applied at once.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for counter in [
            Counters::PatternsEmitted,
            Counters::MovesTried,
            Counters::MovesRejected,
        ] {
            let name: &'static str = counter.into();
            write!(f, "{}={} ", name, self.get(counter))?;
        }
        write!(f, "MaxDepth={}", self.max_depth)
    }
}
