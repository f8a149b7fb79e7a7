use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{SearchError, SearchResult};
use crate::search::Algorithm;
use crate::sequence::DEFAULT_CAPACITY;

/// Configuration for a search run.
///
/// # Configuration Locations
///
/// Values are read from these files, later ones overriding earlier ones:
/// 1. Global `$CONFIG_DIR/dnascout/config.yaml`
/// 2. Local `.dnascout.yaml` in the current directory
/// 3. Custom config file passed with `--config` (must exist)
///
/// Command-line values are applied last with [`SearchConfig::merge_with_cli`].
///
/// # Configuration Format
///
/// ```yaml
/// # Matching strategy: bf (brute force) or kr (Karp-Rabin)
/// algorithm: kr
///
/// sequence_path: "data/genome.txt"
/// pattern_path: "data/pattern.txt"
///
/// # Largest accepted input, in symbols (a full buffer is rejected)
/// max_sequence_len: 512000
///
/// # Report rolling-hash statistics with the count
/// show_stats: false
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "warn"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Matching strategy
    #[serde(default)]
    pub algorithm: Algorithm,

    /// File holding the sequence to search in
    #[serde(default)]
    pub sequence_path: PathBuf,

    /// File holding the pattern to count
    #[serde(default)]
    pub pattern_path: PathBuf,

    /// Capacity of each loaded sequence. Inputs that fill `max_sequence_len - 1`
    /// symbols are treated as too large.
    #[serde(default = "default_max_sequence_len")]
    pub max_sequence_len: usize,

    /// Whether to report scan statistics along with the count
    #[serde(default)]
    pub show_stats: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_sequence_len() -> usize {
    DEFAULT_CAPACITY
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            sequence_path: PathBuf::new(),
            pattern_path: PathBuf::new(),
            max_sequence_len: default_max_sequence_len(),
            show_stats: false,
            log_level: default_log_level(),
        }
    }
}

/// Values given on the command line. `None` leaves the file value alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub algorithm: Option<Algorithm>,
    pub sequence_path: Option<PathBuf>,
    pub pattern_path: Option<PathBuf>,
    pub max_sequence_len: Option<usize>,
    pub show_stats: bool,
    pub log_level: Option<String>,
}

impl SearchConfig {
    /// Loads configuration from the default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration from the default locations plus `config_path`
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let defaults = [
            dirs::config_dir().map(|p| p.join("dnascout/config.yaml")),
            Some(PathBuf::from(".dnascout.yaml")),
        ];

        for path in defaults.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        // An explicitly named file is required to exist
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder.build()?.try_deserialize()
    }

    /// Applies command-line values on top of configuration file values
    pub fn merge_with_cli(mut self, cli: CliOverrides) -> Self {
        if let Some(algorithm) = cli.algorithm {
            self.algorithm = algorithm;
        }
        if let Some(path) = cli.sequence_path {
            self.sequence_path = path;
        }
        if let Some(path) = cli.pattern_path {
            self.pattern_path = path;
        }
        if let Some(limit) = cli.max_sequence_len {
            self.max_sequence_len = limit;
        }
        if cli.show_stats {
            self.show_stats = true;
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        self
    }

    /// Checks values that serde cannot
    pub fn validate(&self) -> SearchResult<()> {
        if self.max_sequence_len < 2 {
            return Err(SearchError::config_error(format!(
                "max_sequence_len must be at least 2, got {}",
                self.max_sequence_len
            )));
        }
        if self.sequence_path.as_os_str().is_empty() {
            return Err(SearchError::config_error("No sequence file given"));
        }
        if self.pattern_path.as_os_str().is_empty() {
            return Err(SearchError::config_error("No pattern file given"));
        }
        Ok(())
    }
}
