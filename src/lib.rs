// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of n-strand weaving patterns by reverse search.
//!
//! A weaving pattern on `n` strands is an `n × (n-1)` grid whose row `i`
//! lists every strand label except `i`. Starting from the pattern with every
//! row ascending, braid moves (simultaneous adjacent swaps in three rows)
//! reach every other pattern. The search emits each pattern exactly once
//! without remembering which patterns it has seen.
//!
//! # Architecture
//!
//! All search state lives in one [`SearchContext`]:
//! - the live [`Pattern`], mutated in place
//! - the forward-move table (which braid moves apply from here)
//! - the parent-edge table (which applied moves lead back towards the start)
//! - the [`Trail`], recording every table write for O(1) backtracking
//!
//! # Search Algorithm
//!
//! [`ReverseSearch`] visits the spanning tree of the move graph depth first.
//! For each candidate move it swaps the move in, lets
//! [`braid::catalog`] update both tables, and descends only if the
//! parent-edge check in [`engine::oracle`] accepts the move as the canonical
//! way to reach the new pattern. Memory is proportional to search depth,
//! which is at most C(n, 3).
//!
//! Counts for small sizes: 1, 2, 8, 62, 908, 24698 patterns for n = 2..=7.
//!
//! # Example
//!
//! ```
//! use weaving_patterns::engine::count;
//!
//! assert_eq!(count(5).unwrap(), 62);
//! ```

pub mod braid;
pub mod cli;
pub mod config;
pub mod context;
pub mod engine;
pub mod errors;
pub mod output;
pub mod pattern;
pub mod state;
pub mod symmetry;
pub mod trail;

// Re-export commonly used types
pub use context::SearchContext;
pub use engine::{count, enumerate, ReverseSearch};
pub use errors::{Result, WeaveError};
pub use output::PatternSink;
pub use pattern::Pattern;
pub use trail::Trail;
