//! CLI argument definitions for the UID dictionary generator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use uid_dict::config::DEFAULT_OUTPUT;

#[derive(Parser)]
#[command(
    name = "uid-dict-gen",
    version,
    about = "Generate the UID dictionary from Part 6 of the DICOM Standard",
    long_about = "Convert the \"UID Values\" registry table (Table A-1) of the \
                  DICOM Standard's Part 6 docbook file into a generated Rust \
                  source file.\n\n\
                  By default the current published part06.xml is downloaded; \
                  pass --local to use an existing standards checkout instead."
)]
pub struct Cli {
    /// Path to a directory containing part06.xml (used instead of downloading).
    #[arg(long = "local", value_name = "DIR")]
    pub local: Option<PathBuf>,

    /// Destination path for the generated dictionary source.
    #[arg(long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Source URL for part06.xml (network mode only).
    #[arg(long = "url", value_name = "URL", conflicts_with = "local")]
    pub url: Option<String>,

    /// Caption of the table to convert.
    #[arg(long = "caption", value_name = "TEXT")]
    pub caption: Option<String>,

    /// Standard revision the host library currently tracks.
    #[arg(long = "expected-revision", value_name = "REV")]
    pub expected_revision: Option<String>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
