// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reverse-search driver.
//!
//! The driver walks the spanning tree of the braid-move graph depth first,
//! starting at [`Pattern::initial`]. At each pattern it emits the pattern,
//! then tries every available move in search order (rows from the top down,
//! columns left to right):
//!
//! 1. checkpoint the trail and swap the move in;
//! 2. update the move tables ([`catalog`](crate::braid::catalog));
//! 3. descend only if the move is the canonical parent edge of the new
//!    pattern ([`oracle`]);
//! 4. rewind the trail and swap the move back out.
//!
//! # Architecture
//!
//! Instead of recursion the driver keeps an explicit stack of frames, one per
//! open pattern. A frame holds the search-order position of its next
//! candidate and the move it currently has applied. Depth reaches C(n, 3),
//! so the call stack stays flat for any supported size.
//!
//! # Example
//!
//! ```
//! use weaving_patterns::engine::enumerate;
//! use weaving_patterns::output::Collector;
//!
//! let mut collector = Collector::new();
//! let statistics = enumerate(4, &mut collector).unwrap();
//! assert_eq!(collector.patterns.len(), 8);
//! assert_eq!(statistics.max_depth(), 4);
//! ```

pub mod oracle;

use tracing::{debug, info, trace};

use crate::braid::{catalog, Move};
use crate::context::SearchContext;
use crate::errors::Result;
use crate::output::{Counter, PatternSink};
use crate::pattern::Pattern;
use crate::state::statistics::{Counters, Statistics};

/// Stack entry tracking one open pattern.
#[derive(Debug, Default)]
struct Frame {
    /// Search-order position of the next candidate move.
    next: usize,
    /// The move currently swapped in from this pattern, if any.
    applied: Option<Move>,
}

/// Enumerates every weaving pattern on `n` strands exactly once.
#[derive(Debug)]
pub struct ReverseSearch {
    ctx: SearchContext,
    stack: Vec<Frame>,
    started: bool,
}

impl ReverseSearch {
    pub fn new(n: usize) -> Result<Self> {
        let ctx = SearchContext::new(n)?;
        let depth = n * (n - 1) * (n - 2) / 6;
        Ok(Self {
            ctx,
            stack: Vec::with_capacity(depth + 1),
            started: false,
        })
    }

    pub fn context(&self) -> &SearchContext {
        &self.ctx
    }

    /// Run the whole search, handing every pattern to `sink`.
    ///
    /// On error (a sink failure or a broken pattern) the search is unwound to
    /// the starting pattern before returning, and nothing further is emitted.
    /// A completed search can be run again and emits the same sequence.
    pub fn run<S: PatternSink + ?Sized>(&mut self, sink: &mut S) -> Result<Statistics> {
        self.reset();
        debug!(
            strands = self.ctx.strands(),
            moves = self.ctx.braids().count_moves(),
            "starting reverse search"
        );
        while self.advance() {
            if let Err(err) = self.emit(sink) {
                self.reset();
                return Err(err);
            }
        }
        sink.finish()?;
        let statistics = &self.ctx.statistics;
        info!(
            strands = self.ctx.strands(),
            patterns = statistics.get(Counters::PatternsEmitted),
            tried = statistics.get(Counters::MovesTried),
            rejected = statistics.get(Counters::MovesRejected),
            max_depth = statistics.max_depth(),
            "reverse search complete"
        );
        Ok(statistics.clone())
    }

    /// Iterate over the patterns, cloning each one.
    ///
    /// Starts from the beginning. The iterator ends after yielding an error.
    pub fn patterns(&mut self) -> Patterns<'_> {
        self.reset();
        Patterns {
            search: self,
            failed: false,
        }
    }

    /// Move to the next pattern to emit.
    ///
    /// Returns false once the search is exhausted.
    fn advance(&mut self) -> bool {
        if !self.started {
            self.started = true;
            self.stack.push(Frame::default());
            return true;
        }
        while let Some(frame) = self.stack.last_mut() {
            if let Some(mv) = frame.applied.take() {
                Self::undo(&mut self.ctx, &mv);
            }
            let Some((position, mv)) = self.ctx.braids().next_move(frame.next) else {
                self.stack.pop();
                continue;
            };
            frame.next = position + 1;
            frame.applied = Some(mv);
            if Self::attempt(&mut self.ctx, &mv) {
                self.ctx.statistics.reached_depth(self.stack.len());
                self.stack.push(Frame::default());
                return true;
            }
        }
        false
    }

    /// Swap `mv` in, update the tables and ask whether to descend.
    fn attempt(ctx: &mut SearchContext, mv: &Move) -> bool {
        ctx.statistics.increment_counter(Counters::MovesTried);
        ctx.checkpoint();
        ctx.swap(mv);
        catalog::record_move(ctx, mv);
        let valid = oracle::is_parent_edge(ctx.unbraids(), mv.z);
        trace!(z = ?mv.z, x = ?mv.braid.x, y = ?mv.braid.y, valid, "tried move");
        if !valid {
            ctx.statistics.increment_counter(Counters::MovesRejected);
        }
        valid
    }

    /// Restore the tables and the pattern from before `mv` was attempted.
    fn undo(ctx: &mut SearchContext, mv: &Move) {
        ctx.rewind();
        ctx.swap(mv);
    }

    /// Check the current pattern and hand it to `sink`.
    fn emit<S: PatternSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        self.check_current()?;
        sink.accept(self.ctx.pattern())
    }

    fn check_current(&mut self) -> Result<()> {
        self.ctx.pattern().check_invariant()?;
        self.ctx.statistics.increment_counter(Counters::PatternsEmitted);
        Ok(())
    }

    /// Unwind every open move and start over.
    fn reset(&mut self) {
        while let Some(mut frame) = self.stack.pop() {
            if let Some(mv) = frame.applied.take() {
                Self::undo(&mut self.ctx, &mv);
            }
        }
        self.started = false;
        self.ctx.statistics = Statistics::new();
    }
}

/// Iterator over the patterns of a [`ReverseSearch`].
#[derive(Debug)]
pub struct Patterns<'a> {
    search: &'a mut ReverseSearch,
    failed: bool,
}

impl Iterator for Patterns<'_> {
    type Item = Result<Pattern>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || !self.search.advance() {
            return None;
        }
        match self.search.check_current() {
            Ok(()) => Some(Ok(self.search.ctx.pattern().clone())),
            Err(err) => {
                self.failed = true;
                self.search.reset();
                Some(Err(err))
            }
        }
    }
}

/// Enumerate every pattern on `n` strands into `sink`.
pub fn enumerate<S: PatternSink + ?Sized>(n: usize, sink: &mut S) -> Result<Statistics> {
    ReverseSearch::new(n)?.run(sink)
}

/// Number of patterns on `n` strands.
pub fn count(n: usize) -> Result<u64> {
    let mut counter = Counter::default();
    enumerate(n, &mut counter)?;
    Ok(counter.count)
}
