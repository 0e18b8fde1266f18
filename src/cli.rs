// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command handler for the `weave` binary.
//!
//! Kept out of `main.rs` so argument handling and output selection can be
//! tested without spawning the binary.

use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use tracing::info;

use crate::config::{GenerateConfig, OutputTarget};
use crate::engine::ReverseSearch;
use crate::output::{Counter, PatternSink, SymmetryFilter, Tally, TextWriter};
use crate::state::statistics::Statistics;

/// Outcome of one `weave` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Patterns written (or counted), after any symmetry folding.
    pub written: u64,
    pub statistics: Statistics,
}

/// Enumerate patterns as described by `config`.
pub fn generate(config: &GenerateConfig) -> Result<Summary> {
    config.validate()?;
    let sink: Box<dyn PatternSink> = match &config.output {
        OutputTarget::Stdout => Box::new(TextWriter::new(BufWriter::new(io::stdout().lock()))),
        OutputTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create output file {}", path.display()))?;
            Box::new(TextWriter::new(BufWriter::new(file)))
        }
        OutputTarget::Discard => Box::new(Counter::default()),
    };
    let sink: Box<dyn PatternSink> = if config.fold_symmetry {
        Box::new(SymmetryFilter::new(sink))
    } else {
        sink
    };
    let mut sink = Tally::new(sink);

    let mut search = ReverseSearch::new(config.strands)?;
    let statistics = search
        .run(&mut sink)
        .with_context(|| format!("enumerating patterns on {} strands", config.strands))?;

    if let OutputTarget::File(path) = &config.output {
        info!(path = %path.display(), written = sink.count(), "patterns written");
    }
    Ok(Summary {
        written: sink.count(),
        statistics,
    })
}
