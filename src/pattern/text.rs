// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text form of weaving patterns.
//!
//! Rows are written from the top strand down, each as its 1-based label, a
//! `|`, and the 1-based labels of the row each followed by a comma:
//!
//! ```text
//! 3|1,2,
//! 2|1,3,
//! 1|2,3,
//! ```
//!
//! A stream of patterns separates patterns by a blank line; writers put
//! `"\n\n"` after every pattern, including the last.

use std::fmt;
use std::str::FromStr;

use super::Pattern;
use crate::errors::{Result, WeaveError};

/// Separator written after every pattern in a stream.
pub const PATTERN_SEPARATOR: &str = "\n\n";

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..self.strands()).rev() {
            write!(f, "{}|", i + 1)?;
            for &label in self.row(i) {
                write!(f, "{},", label + 1)?;
            }
            if i != 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = WeaveError;

    fn from_str(s: &str) -> Result<Self> {
        let lines: Vec<(usize, &str)> = s
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .collect();
        parse_block(&lines)
    }
}

/// Parse a stream of patterns separated by blank lines.
pub fn parse_patterns(text: &str) -> Result<Vec<Pattern>> {
    let mut patterns = Vec::new();
    let mut block: Vec<(usize, &str)> = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            if !block.is_empty() {
                patterns.push(parse_block(&block)?);
                block.clear();
            }
        } else {
            block.push((i + 1, line));
        }
    }
    if !block.is_empty() {
        patterns.push(parse_block(&block)?);
    }
    Ok(patterns)
}

/// Parse one pattern from its non-empty, trimmed, numbered lines.
fn parse_block(lines: &[(usize, &str)]) -> Result<Pattern> {
    let n = lines.len();
    let first_line = lines.first().map(|&(number, _)| number).unwrap_or(1);
    Pattern::check_size(n).map_err(|_| {
        WeaveError::parse(first_line, format!("a pattern needs at least 2 rows, found {}", n))
    })?;

    let mut rows = vec![Vec::new(); n];
    for (k, &(line_number, line)) in lines.iter().enumerate() {
        let expected_label = n - k;
        let (label, labels) = line
            .split_once('|')
            .ok_or_else(|| WeaveError::parse(line_number, "missing '|' after row label"))?;
        let label = parse_label(label, n, line_number)?;
        if label != expected_label {
            return Err(WeaveError::parse(
                line_number,
                format!("expected row {}, found row {}", expected_label, label),
            ));
        }
        let row = &mut rows[label - 1];
        for entry in labels.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            row.push((parse_label(entry, n, line_number)? - 1) as u8);
        }
    }
    Pattern::from_rows(&rows)
}

/// Parse a 1-based label in `1..=n`.
fn parse_label(text: &str, n: usize, line: usize) -> Result<usize> {
    let label: usize = text
        .trim()
        .parse()
        .map_err(|_| WeaveError::parse(line, format!("'{}' is not a strand label", text.trim())))?;
    if label == 0 || label > n {
        return Err(WeaveError::parse(
            line,
            format!("strand label {} is outside 1..={}", label, n),
        ));
    }
    Ok(label)
}
