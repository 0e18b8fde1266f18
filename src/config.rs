// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line arguments and the validated generator configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::errors::Result;
use crate::pattern::Pattern;

/// Enumerate every n-strand weaving pattern by reverse search.
#[derive(Debug, Parser)]
#[command(name = "weave", version, about, long_about = None)]
pub struct Cli {
    /// Number of strands
    pub strands: usize,

    /// Output file, or `-` for stdout [default: weaving_patterns_<STRANDS>.txt]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only print the number of patterns
    #[arg(long)]
    pub count: bool,

    /// Keep one pattern per rotation/reflection orbit
    #[arg(long)]
    pub fold_symmetry: bool,

    /// Log level, overridden by RUST_LOG
    #[arg(long, env = "WEAVE_LOG", default_value = "info")]
    pub log_level: String,
}

/// Where emitted patterns go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
    /// Count only.
    Discard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub strands: usize,
    pub output: OutputTarget,
    pub fold_symmetry: bool,
}

impl GenerateConfig {
    pub fn new(strands: usize) -> Self {
        Self {
            strands,
            output: OutputTarget::File(Self::default_output_path(strands)),
            fold_symmetry: false,
        }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let output = if cli.count {
            OutputTarget::Discard
        } else {
            match &cli.output {
                Some(path) if path.as_os_str() == "-" => OutputTarget::Stdout,
                Some(path) => OutputTarget::File(path.clone()),
                None => OutputTarget::File(Self::default_output_path(cli.strands)),
            }
        };
        let config = Self {
            strands: cli.strands,
            output,
            fold_symmetry: cli.fold_symmetry,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        Pattern::check_size(self.strands)
    }

    /// `weaving_patterns_<n>.txt` in the working directory.
    pub fn default_output_path(strands: usize) -> PathBuf {
        PathBuf::from(format!("weaving_patterns_{}.txt", strands))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WeaveError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("weave").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["7"]);
        assert_eq!(cli.log_level, "info");
        let config = GenerateConfig::from_cli(&cli).unwrap();
        assert_eq!(config, GenerateConfig::new(7));
        assert_eq!(
            config.output,
            OutputTarget::File(PathBuf::from("weaving_patterns_7.txt"))
        );
        assert!(!config.fold_symmetry);
    }

    #[test]
    fn test_output_targets() {
        let config = GenerateConfig::from_cli(&parse(&["5", "-o", "-"])).unwrap();
        assert_eq!(config.output, OutputTarget::Stdout);

        let config = GenerateConfig::from_cli(&parse(&["5", "--output", "out.txt"])).unwrap();
        assert_eq!(config.output, OutputTarget::File(PathBuf::from("out.txt")));

        let config =
            GenerateConfig::from_cli(&parse(&["5", "-o", "out.txt", "--count", "--fold-symmetry"]))
                .unwrap();
        assert_eq!(config.output, OutputTarget::Discard);
        assert!(config.fold_symmetry);
    }

    #[test]
    fn test_invalid_size_rejected() {
        let err = GenerateConfig::from_cli(&parse(&["1"])).unwrap_err();
        assert!(matches!(err, WeaveError::InvalidSize { n: 1, .. }));
    }

    #[test]
    fn test_missing_size_is_a_usage_error() {
        assert!(Cli::try_parse_from(["weave"]).is_err());
        assert!(Cli::try_parse_from(["weave", "many"]).is_err());
    }
}
