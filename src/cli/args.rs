//! Command line argument parsing for the morphemizer CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Morphemizer - split text into morphemes for vocabulary analysis
#[derive(Parser, Debug, Clone)]
#[command(name = "morphemizer")]
#[command(about = "Split text into morphemes with pluggable per-language strategies")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MorphemizerArgs {
    /// Increase verbosity (-v verbose, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON); defaults to $MORPHEMIZER_CONFIG
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl MorphemizerArgs {
    /// Get the effective verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            // Each -v raises the normal level by one.
            self.verbose.saturating_add(1).min(3)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the registered morphemizers
    List,

    /// Segment text into morphemes
    Segment(SegmentArgs),

    /// Count morpheme types in a text file
    Frequency(FrequencyArgs),
}

/// Arguments for segmenting text
#[derive(Parser, Debug, Clone)]
pub struct SegmentArgs {
    /// Name of the morphemizer, e.g. SpaceMorphemizer
    #[arg(value_name = "MORPHEMIZER")]
    pub morphemizer: String,

    /// Text to segment; read from --input or stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// File with one expression per line
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,
}

/// Arguments for counting morpheme types
#[derive(Parser, Debug, Clone)]
pub struct FrequencyArgs {
    /// Name of the morphemizer, e.g. JiebaMorphemizer
    #[arg(value_name = "MORPHEMIZER")]
    pub morphemizer: String,

    /// Text file to analyze, one expression per line
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Only show the most frequent entries
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// Tab-separated values
    Tsv,
}
