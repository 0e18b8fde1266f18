// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for pattern enumeration and pattern text handling.

use thiserror::Error;

/// Errors raised by the enumeration engine, the text format and the sinks.
#[derive(Debug, Error)]
pub enum WeaveError {
    /// The requested number of strands is outside the supported range.
    #[error("pattern size must be between {min} and {max} strands, got {n}")]
    InvalidSize { n: usize, min: usize, max: usize },

    /// A row is not a permutation of the other strand labels.
    ///
    /// Raised at emission time, this is an internal-consistency fault of the
    /// move catalog, never a data problem. The run stops without emitting.
    #[error("row {row} is not a permutation of the other strands: {values:?}")]
    BrokenInvariant { row: usize, values: Vec<u8> },

    /// Pattern text could not be parsed.
    #[error("malformed pattern text at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Writing emitted patterns failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WeaveError>;

impl WeaveError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        WeaveError::Parse {
            line,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = WeaveError::InvalidSize { n: 1, min: 2, max: 64 };
        assert_eq!(
            err.to_string(),
            "pattern size must be between 2 and 64 strands, got 1"
        );

        let err = WeaveError::BrokenInvariant {
            row: 2,
            values: vec![0, 0],
        };
        assert_eq!(
            err.to_string(),
            "row 2 is not a permutation of the other strands: [0, 0]"
        );

        let err = WeaveError::parse(3, "missing '|'");
        assert_eq!(err.to_string(), "malformed pattern text at line 3: missing '|'");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: WeaveError = io.into();
        assert!(matches!(err, WeaveError::Io(_)));
    }
}
