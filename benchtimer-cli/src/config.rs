//! Configuration loading from benchtimer.toml
//!
//! Configuration can be specified in a `benchtimer.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.

use crate::workload::InputOrdering;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file looked up by [`BenchTimerConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "benchtimer.toml";

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration TOML
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Values parse but cannot be used
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// BenchTimer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BenchTimerConfig {
    /// Sorting sweep configuration
    #[serde(default)]
    pub sweep: SweepConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Sizes, run counts and orderings measured by the sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// First input size
    #[serde(default = "default_start_size")]
    pub start_size: usize,
    /// Sizes at or above this are not measured
    #[serde(default = "default_max_size")]
    pub max_size: usize,
    /// Multiplier between consecutive sizes
    #[serde(default = "default_growth_factor")]
    pub growth_factor: usize,
    /// Measured runs per (size, ordering)
    #[serde(default = "default_runs")]
    pub runs: u32,
    /// Fixed RNG seed for reproducible inputs
    #[serde(default)]
    pub seed: Option<u64>,
    /// Input orderings to measure
    #[serde(default = "default_orderings")]
    pub orderings: Vec<InputOrdering>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start_size: default_start_size(),
            max_size: default_max_size(),
            growth_factor: default_growth_factor(),
            runs: default_runs(),
            seed: None,
            orderings: default_orderings(),
        }
    }
}

fn default_start_size() -> usize {
    50
}
fn default_max_size() -> usize {
    3500
}
fn default_growth_factor() -> usize {
    2
}
fn default_runs() -> u32 {
    10
}
fn default_orderings() -> Vec<InputOrdering> {
    InputOrdering::ALL.to_vec()
}

impl SweepConfig {
    /// Reject configurations that would measure nothing or never terminate
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_size == 0 {
            return Err(ConfigError::Invalid("start_size must be at least 1".into()));
        }
        if self.growth_factor < 2 {
            return Err(ConfigError::Invalid(
                "growth_factor must be at least 2".into(),
            ));
        }
        if self.runs == 0 {
            return Err(ConfigError::Invalid("runs must be at least 1".into()));
        }
        if self.orderings.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one ordering is required".into(),
            ));
        }
        Ok(())
    }

    /// Input sizes in measurement order
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::new();
        if self.start_size == 0 || self.growth_factor < 2 {
            return sizes;
        }
        let mut n = self.start_size;
        while n < self.max_size {
            sizes.push(n);
            match n.checked_mul(self.growth_factor) {
                Some(next) => n = next,
                None => break,
            }
        }
        sizes
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human", "json", "csv"
    #[serde(default = "default_format")]
    pub format: String,
    /// Write the report here instead of stdout
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            path: None,
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl BenchTimerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` looking for [`CONFIG_FILE_NAME`]
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!("ignoring {}: {}", config_path.display(), e);
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# BenchTimer Configuration

[sweep]
# First input size
start_size = 50
# Sizes at or above this are not measured
max_size = 3500
# Multiplier between consecutive sizes
growth_factor = 2
# Measured runs per size and ordering (warmup is extra)
runs = 10
# Fixed RNG seed for reproducible inputs (uncomment to enable)
# seed = 42
# Input orderings: random, ordered, reverse, partially-ordered
orderings = ["random", "ordered", "reverse", "partially-ordered"]

[output]
# Default output format: human, json, csv
format = "human"
# Report file (stdout if not set)
# path = "target/benchtimer/report.json"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchTimerConfig::default();
        assert_eq!(config.sweep.start_size, 50);
        assert_eq!(config.sweep.max_size, 3500);
        assert_eq!(config.sweep.runs, 10);
        assert_eq!(config.sweep.orderings.len(), 4);
        assert_eq!(config.output.format, "human");
        assert!(config.sweep.validate().is_ok());
    }

    #[test]
    fn test_sizes_double_until_max() {
        let sweep = SweepConfig::default();
        assert_eq!(sweep.sizes(), vec![50, 100, 200, 400, 800, 1600, 3200]);

        let sweep = SweepConfig {
            start_size: 10,
            max_size: 10,
            ..SweepConfig::default()
        };
        assert!(sweep.sizes().is_empty());
    }

    #[test]
    fn test_sizes_stop_on_overflow() {
        let sweep = SweepConfig {
            start_size: usize::MAX / 2 + 1,
            max_size: usize::MAX,
            ..SweepConfig::default()
        };
        assert_eq!(sweep.sizes(), vec![usize::MAX / 2 + 1]);
    }

    #[test]
    fn test_validate() {
        let bad = [
            SweepConfig {
                start_size: 0,
                ..SweepConfig::default()
            },
            SweepConfig {
                growth_factor: 1,
                ..SweepConfig::default()
            },
            SweepConfig {
                runs: 0,
                ..SweepConfig::default()
            },
            SweepConfig {
                orderings: Vec::new(),
                ..SweepConfig::default()
            },
        ];
        for sweep in bad {
            assert!(matches!(sweep.validate(), Err(ConfigError::Invalid(_))));
        }
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [sweep]
            runs = 25
            orderings = ["reverse"]
            seed = 3
        "#;

        let config: BenchTimerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sweep.runs, 25);
        assert_eq!(config.sweep.orderings, vec![InputOrdering::Reverse]);
        assert_eq!(config.sweep.seed, Some(3));
        // Defaults should still apply
        assert_eq!(config.sweep.start_size, 50);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_default_toml_parses() {
        let config: BenchTimerConfig = toml::from_str(&BenchTimerConfig::default_toml()).unwrap();
        assert_eq!(config, BenchTimerConfig::default());
    }

    #[test]
    fn test_load_and_discover() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let loaded = BenchTimerConfig::load(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(loaded.output.format, "json");

        let discovered = BenchTimerConfig::discover_from(&nested).unwrap();
        assert_eq!(discovered, loaded);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = BenchTimerConfig::load(dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[sweep\nruns = ").unwrap();
        let broken = BenchTimerConfig::load(&path);
        assert!(matches!(broken, Err(ConfigError::Parse { .. })));
    }
}
