use std::{fs, path::Path};

use color_eyre::eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, Commands};

const fn default_words_per_minute() -> u64 {
  200
}

const fn default_max_heading_level() -> u8 {
  6
}

/// Configuration options for mdmeta
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
  /// Words per minute assumed for reading-time estimates
  #[serde(default = "default_words_per_minute")]
  pub words_per_minute: u64,

  /// Deepest heading level included in extracted outlines
  #[serde(default = "default_max_heading_level")]
  pub max_heading_level: u8,

  /// Treat validation warnings as fatal
  #[serde(default)]
  pub strict: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      words_per_minute:  default_words_per_minute(),
      max_heading_level: default_max_heading_level(),
      strict:            false,
    }
  }
}

impl Config {
  /// Create a new configuration from a file.
  /// Only TOML and JSON are supported for the time being.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).wrap_err_with(|| {
      format!("Failed to read config file: {}", path.display())
    })?;

    path.extension().map_or_else(
      || Err(eyre!("Config file has no extension: {}", path.display())),
      |ext| {
        match ext.to_str().unwrap_or("").to_lowercase().as_str() {
          "json" => {
            serde_json::from_str(&content).wrap_err_with(|| {
              format!("Failed to parse JSON config from {}", path.display())
            })
          },
          "toml" => {
            toml::from_str(&content).wrap_err_with(|| {
              format!("Failed to parse TOML config from {}", path.display())
            })
          },
          _ => {
            Err(eyre!("Unsupported config file format: {}", path.display()))
          },
        }
      },
    )
  }

  /// Load config from file and CLI arguments; flags override file values.
  pub fn load(cli: &Cli) -> Result<Self> {
    let mut config = match &cli.config_file {
      Some(config_path) => {
        Self::from_file(config_path).wrap_err_with(|| {
          format!("Failed to load config from {}", config_path.display())
        })?
      },
      None => Self::default(),
    };

    if let Commands::Validate { strict, .. } = &cli.command {
      if *strict {
        config.strict = true;
      }
    }

    Ok(config)
  }
}
