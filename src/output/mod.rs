// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sinks receiving the patterns emitted by the search.
//!
//! The search lends each pattern to the sink by reference for the duration of
//! one call; the pattern is overwritten as soon as the search moves on, so
//! sinks that keep patterns must clone them.

use std::io::Write;

use crate::errors::Result;
use crate::pattern::text::PATTERN_SEPARATOR;
use crate::pattern::Pattern;
use crate::symmetry::{check_symmetry, SymmetryType};

/// Consumer of emitted patterns.
pub trait PatternSink {
    /// Receive one pattern. An error stops the search.
    fn accept(&mut self, pattern: &Pattern) -> Result<()>;

    /// Called once after the last pattern of a completed run.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: PatternSink + ?Sized> PatternSink for &mut S {
    fn accept(&mut self, pattern: &Pattern) -> Result<()> {
        (**self).accept(pattern)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

impl<S: PatternSink + ?Sized> PatternSink for Box<S> {
    fn accept(&mut self, pattern: &Pattern) -> Result<()> {
        (**self).accept(pattern)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

/// Writes patterns in the text format, each followed by a blank line.
#[derive(Debug)]
pub struct TextWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PatternSink for TextWriter<W> {
    fn accept(&mut self, pattern: &Pattern) -> Result<()> {
        write!(self.writer, "{}{}", pattern, PATTERN_SEPARATOR)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps a copy of every pattern.
#[derive(Debug, Default)]
pub struct Collector {
    pub patterns: Vec<Pattern>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_patterns(self) -> Vec<Pattern> {
        self.patterns
    }
}

impl PatternSink for Collector {
    fn accept(&mut self, pattern: &Pattern) -> Result<()> {
        self.patterns.push(pattern.clone());
        Ok(())
    }
}

/// Counts patterns without keeping them.
#[derive(Debug, Default)]
pub struct Counter {
    pub count: u64,
}

impl PatternSink for Counter {
    fn accept(&mut self, _pattern: &Pattern) -> Result<()> {
        self.count += 1;
        Ok(())
    }
}

/// Counts patterns on their way to an inner sink.
#[derive(Debug)]
pub struct Tally<S> {
    inner: S,
    count: u64,
}

impl<S: PatternSink> Tally<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, count: 0 }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: PatternSink> PatternSink for Tally<S> {
    fn accept(&mut self, pattern: &Pattern) -> Result<()> {
        self.inner.accept(pattern)?;
        self.count += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.inner.finish()
    }
}

/// Adapts a closure into a sink.
pub struct FnSink<F>(pub F);

impl<F: FnMut(&Pattern) -> Result<()>> PatternSink for FnSink<F> {
    fn accept(&mut self, pattern: &Pattern) -> Result<()> {
        (self.0)(pattern)
    }
}

/// Forwards one representative per dihedral orbit to the inner sink.
///
/// A pattern is forwarded when it is the largest of its rotations and
/// reflections (see [`check_symmetry`]); exactly one pattern per orbit
/// qualifies.
#[derive(Debug)]
pub struct SymmetryFilter<S> {
    inner: S,
    canonical: u64,
    equivocal: u64,
    skipped: u64,
}

impl<S: PatternSink> SymmetryFilter<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            canonical: 0,
            equivocal: 0,
            skipped: 0,
        }
    }

    /// Representatives with no non-trivial symmetry.
    pub fn canonical(&self) -> u64 {
        self.canonical
    }

    /// Representatives fixed by some non-trivial symmetry.
    pub fn equivocal(&self) -> u64 {
        self.equivocal
    }

    /// Patterns dropped as non-representatives.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: PatternSink> PatternSink for SymmetryFilter<S> {
    fn accept(&mut self, pattern: &Pattern) -> Result<()> {
        match check_symmetry(pattern) {
            SymmetryType::Canonical => self.canonical += 1,
            SymmetryType::Equivocal => self.equivocal += 1,
            SymmetryType::NonCanonical => {
                self.skipped += 1;
                return Ok(());
            }
        }
        self.inner.accept(pattern)
    }

    fn finish(&mut self) -> Result<()> {
        self.inner.finish()
    }
}
