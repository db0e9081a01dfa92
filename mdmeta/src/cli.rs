use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for mdmeta
#[derive(Parser, Debug)]
#[command(author, version, about = "mdmeta: markdown metadata at a glance")]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Path to a configuration file (TOML or JSON)
  #[arg(short = 'c', long = "config-file")]
  pub config_file: Option<PathBuf>,
}

/// All supported subcommands for the mdmeta CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Print extracted metadata and validation results for one file.
  Inspect {
    /// Path to the markdown file.
    file: PathBuf,

    /// Emit machine-readable JSON instead of the text report.
    #[arg(long)]
    json: bool,
  },

  /// Walk a directory tree and build a JSON metadata index.
  Scan {
    /// Directory containing markdown files.
    input_dir: PathBuf,

    /// Output file for the index; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of threads to use for parallel extraction.
    #[arg(short = 'p', long = "jobs")]
    jobs: Option<usize>,

    /// Order entries by their embedded dates, most recent first.
    #[arg(long = "sort", default_value = "path", value_parser = ["path", "date"])]
    sort: String,
  },

  /// Validate documents; exits non-zero when any document has errors.
  Validate {
    /// Markdown files to validate.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Treat warnings as fatal.
    #[arg(long)]
    strict: bool,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
