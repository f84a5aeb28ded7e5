//! Configuration handling for the recomb CLI
//!
//! Defaults can be kept in a `recomb.toml` file; command line flags override
//! them.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

pub const DEFAULT_CONFIG_FILE: &str = "recomb.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Treat each input file as its own group
    #[serde(default)]
    pub group_by_file: bool,

    /// Breakpoint tokens used when none are given on the command line
    #[serde(default)]
    pub breakpoints: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Residues per FASTA line, 0 for unwrapped
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_line_width() -> usize { 0 }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
        }
    }
}

/// Values taken from the command line that may override the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub breakpoints: Vec<String>,
    pub group_by_file: bool,
    pub line_width: Option<usize>,
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> CliResult<Self> {
        match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::file_not_found(path.to_path_buf()));
                }
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    log::info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                    Self::load_from_file(&default_path)
                } else {
                    log::debug!("Using default configuration");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::config(format!(
                "Failed to read configuration file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Generate example configuration file content
    pub fn example_toml() -> CliResult<String> {
        let example = Self {
            general: GeneralConfig {
                group_by_file: false,
                breakpoints: vec!["113".to_string(), "242".to_string()],
            },
            output: OutputConfig { line_width: 60 },
        };
        toml::to_string_pretty(&example)
            .map_err(|e| CliError::config(format!("TOML serialization error: {}", e)))
    }

    /// Apply command line values on top of the file configuration.
    ///
    /// Breakpoints given on the command line replace the configured list
    /// rather than extending it. `--group-by-file` can only switch grouping
    /// on.
    pub fn merge_cli_args(&mut self, overrides: CliOverrides) {
        if !overrides.breakpoints.is_empty() {
            self.general.breakpoints = overrides.breakpoints;
        }
        if overrides.group_by_file {
            self.general.group_by_file = true;
        }
        if let Some(width) = overrides.line_width {
            self.output.line_width = width;
        }
    }
}
