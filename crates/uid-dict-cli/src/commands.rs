//! The single generate command.

use anyhow::{Context, Result};
use tracing::debug;

use uid_dict::config::PART06_URL;
use uid_dict::{GenerateReport, GeneratorConfig, SourceSpec, generate};

use crate::cli::Cli;

/// Build the generator configuration from CLI flags and run the pipeline.
pub fn run_generate(cli: &Cli) -> Result<GenerateReport> {
    let source = match &cli.local {
        Some(dir) => SourceSpec::LocalDir(dir.clone()),
        None => SourceSpec::Download {
            url: cli
                .url
                .clone()
                .unwrap_or_else(|| PART06_URL.to_string()),
        },
    };

    let mut config = GeneratorConfig::new(source).with_output_path(cli.output.clone());
    if let Some(caption) = &cli.caption {
        config = config.with_caption(caption.clone());
    }
    if let Some(revision) = &cli.expected_revision {
        config = config.with_expected_revision(revision.clone());
    }
    debug!(?config, "running generator");

    generate(&config).context("generate UID dictionary")
}
