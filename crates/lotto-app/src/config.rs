use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

use lotto_core::model::{Bounds, ModelError, Pool};

const DEFAULT_LOG_FILE: &str = "lotto-telemetry.jsonl";

/// Run configuration loaded from YAML. Anything left unset is asked for
/// interactively.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FilterConfig {
    #[serde(default)]
    pub pool: Option<Vec<u8>>,
    #[serde(default)]
    pub quick_pick: Option<QuickPickConfig>,
    #[serde(default)]
    pub even: Option<BoundsConfig<u8>>,
    #[serde(default)]
    pub sum: Option<BoundsConfig<u16>>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FilterConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: FilterConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        if self.pool.is_some() && self.quick_pick.is_some() {
            return Err(ValidationError::InvalidField {
                field: "pool".to_string(),
                message: "give either an explicit pool or quick_pick, not both".to_string(),
            });
        }
        if let Some(values) = self.pool.as_ref() {
            Pool::new(values.iter().copied()).map_err(|err| model_error("pool", err))?;
        }
        if let Some(quick_pick) = self.quick_pick.as_ref() {
            quick_pick.validate()?;
        }
        if let Some(even) = self.even.as_ref() {
            even.to_even_bounds()?;
        }
        if let Some(sum) = self.sum.as_ref() {
            sum.to_sum_bounds()?;
        }
        self.output.validate()?;
        self.logging.normalize();
        Ok(())
    }
}

/// Draw the pool at random instead of listing it.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct QuickPickConfig {
    pub size: usize,
    #[serde(default)]
    pub seed: u64,
}

impl QuickPickConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if !(Pool::MIN_SIZE..=Pool::MAX_SIZE).contains(&self.size) {
            return Err(ValidationError::InvalidField {
                field: "quick_pick.size".to_string(),
                message: format!(
                    "size must be between {} and {}",
                    Pool::MIN_SIZE,
                    Pool::MAX_SIZE
                ),
            });
        }
        Ok(())
    }

    pub fn draw(&self) -> Result<Pool, ModelError> {
        Pool::quick_pick(self.size, self.seed)
    }
}

/// Inclusive `min..=max` pair as written in YAML.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct BoundsConfig<T> {
    pub min: T,
    pub max: T,
}

impl BoundsConfig<u8> {
    pub fn to_even_bounds(&self) -> Result<Bounds<u8>, ValidationError> {
        Bounds::even_count(self.min, self.max).map_err(|err| model_error("even", err))
    }
}

impl BoundsConfig<u16> {
    pub fn to_sum_bounds(&self) -> Result<Bounds<u16>, ValidationError> {
        Bounds::sum(self.min, self.max).map_err(|err| model_error("sum", err))
    }
}

/// Reporting switches.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_print_combinations")]
    pub print_combinations: bool,
    #[serde(default)]
    pub summary_json: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            print_combinations: default_print_combinations(),
            summary_json: None,
        }
    }
}

impl OutputConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = self.summary_json.as_ref() {
            if path.trim().is_empty() {
                return Err(ValidationError::InvalidField {
                    field: "output.summary_json".to_string(),
                    message: "path must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn summary_json_path(&self) -> Option<PathBuf> {
        self.summary_json.as_ref().map(PathBuf::from)
    }
}

fn default_print_combinations() -> bool {
    true
}

/// Logging configuration defaults to disabled structured logs.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
            log_file: default_log_file(),
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
        if self.log_file.trim().is_empty() {
            self.log_file = default_log_file();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}

fn model_error(field: &str, err: ModelError) -> ValidationError {
    ValidationError::InvalidField {
        field: field.to_string(),
        message: err.to_string(),
    }
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
