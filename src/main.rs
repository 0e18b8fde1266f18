// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `weave`: write every weaving pattern on N strands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use weaving_patterns::cli::generate;
use weaving_patterns::config::{Cli, GenerateConfig, OutputTarget};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `-o -` output stays clean.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = GenerateConfig::from_cli(&cli)?;
    let summary = generate(&config)?;

    if config.output == OutputTarget::Discard {
        println!("{}", summary.written);
    }
    Ok(())
}
