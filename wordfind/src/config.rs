//! Search configuration.
//!
//! # Configuration Locations
//!
//! The configuration can be loaded from multiple locations in order of
//! precedence:
//! 1. Custom config file specified via `--config` flag
//! 2. Local `.wordfind.yaml` in the current directory
//! 3. Global `$HOME/.config/wordfind/config.yaml`
//!
//! # Configuration Format
//!
//! The configuration uses YAML format. Example:
//! ```yaml
//! # Board dimensions
//! width: 4
//! height: 4
//!
//! # Board contents as one flat string, split into rows by width/height
//! contents: "catsdogsbirdfish"
//!
//! # Word list file, one word per line
//! dictionary_path: "/usr/share/dict/words"
//!
//! # Show only statistics
//! stats_only: false
//!
//! # Log level (trace, debug, info, warn, error)
//! log_level: "info"
//! ```
//!
//! When using the CLI, command-line arguments take precedence over config
//! file values. The merging behavior is defined in `merge_with_cli`.

use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::board::MIN_BOARD_DIMENSION;

/// Settings for one search run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Board width in cells
    #[serde(default = "default_board_dimension")]
    pub width: usize,

    /// Board height in cells
    #[serde(default = "default_board_dimension")]
    pub height: usize,

    /// Board contents as one flat string, split into rows by width/height
    #[serde(default)]
    pub contents: String,

    /// Word list file, one word per line
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: PathBuf,

    /// Whether to only show statistics instead of the found words
    #[serde(default)]
    pub stats_only: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_board_dimension() -> usize {
    MIN_BOARD_DIMENSION
}

fn default_dictionary_path() -> PathBuf {
    PathBuf::from("words.txt")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            width: default_board_dimension(),
            height: default_board_dimension(),
            contents: String::new(),
            dictionary_path: default_dictionary_path(),
            stats_only: false,
            log_level: default_log_level(),
        }
    }
}

impl SearchConfig {
    /// Loads configuration from the default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration from a specific file, falling back to the
    /// default locations
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Default config locations
        let config_files = [
            // Global config
            dirs::config_dir().map(|p| p.join("wordfind/config.yaml")),
            // Local config
            Some(PathBuf::from(".wordfind.yaml")),
            // Custom config
            config_path.map(PathBuf::from),
        ];

        // Add existing config files
        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        // Build and deserialize
        builder.build()?.try_deserialize()
    }

    /// Merges CLI arguments with configuration file values
    pub fn merge_with_cli(mut self, cli_config: SearchConfig) -> Self {
        // CLI values take precedence over config file values
        if cli_config.width != default_board_dimension() {
            self.width = cli_config.width;
        }
        if cli_config.height != default_board_dimension() {
            self.height = cli_config.height;
        }
        if !cli_config.contents.is_empty() {
            self.contents = cli_config.contents;
        }
        if cli_config.dictionary_path != default_dictionary_path() {
            self.dictionary_path = cli_config.dictionary_path;
        }
        if cli_config.stats_only {
            self.stats_only = true;
        }
        if cli_config.log_level != default_log_level() {
            self.log_level = cli_config.log_level;
        }
        self
    }
}
