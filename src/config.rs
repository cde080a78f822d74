//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::workload::AggregateFunction;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub workload: WorkloadConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection settings for the IoTDB REST service
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_scheme")]
    pub scheme: String,

    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default = "default_password")]
    pub password: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    18080
}

fn default_scheme() -> String {
    "http".to_string()
}

fn default_username() -> String {
    "root".to_string()
}

fn default_password() -> String {
    "root".to_string()
}

fn default_request_timeout() -> u64 {
    60_000
}

impl DatabaseConfig {
    /// `<scheme>://<host>:<port>`
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            scheme: default_scheme(),
            username: default_username(),
            password: default_password(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

/// Workload settings the adapter reads
#[derive(Debug, Clone, Deserialize)]
pub struct WorkloadConfig {
    /// Mark inserted tablets as aligned timeseries
    #[serde(default = "default_sensor_ts_alignment")]
    pub sensor_ts_alignment: bool,

    #[serde(default = "default_aggregate_function")]
    pub query_aggregate_function: AggregateFunction,
}

fn default_sensor_ts_alignment() -> bool {
    true
}

fn default_aggregate_function() -> AggregateFunction {
    AggregateFunction::Count
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            sensor_ts_alignment: default_sensor_ts_alignment(),
            query_aggregate_function: default_aggregate_function(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// The first existing file wins. A file that exists but cannot be read or
    /// parsed is an error rather than a silent fall back to defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("iotdb-rest-bench").join("config.toml")),
            Some(PathBuf::from("/etc/iotdb-rest-bench/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    fn load_first(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        match paths.iter().find(|p| p.exists()) {
            Some(path) => {
                let config = Self::load_with_env(path)?;
                tracing::info!("Loaded config from {:?}", path);
                Ok(config)
            }
            None => {
                tracing::info!("Using default config with environment overrides");
                Ok(Self::from_env())
            }
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `IOTDB_REST_*` overrides; values that do not parse are ignored
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Database overrides
        if let Some(host) = var("IOTDB_REST_HOST") {
            self.database.host = host;
        }
        if let Some(port) = var("IOTDB_REST_PORT") {
            if let Ok(p) = port.parse() {
                self.database.port = p;
            }
        }
        if let Some(user) = var("IOTDB_REST_USER") {
            self.database.username = user;
        }
        if let Some(password) = var("IOTDB_REST_PASSWORD") {
            self.database.password = password;
        }

        // Workload overrides
        if let Some(aligned) = var("IOTDB_REST_ALIGNED") {
            if let Ok(a) = aligned.parse() {
                self.workload.sensor_ts_alignment = a;
            }
        }

        // Logging overrides
        if let Some(level) = var("IOTDB_REST_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("IOTDB_REST_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# iotdb-rest-bench configuration
#
# Environment variables override these settings:
# - IOTDB_REST_HOST
# - IOTDB_REST_PORT
# - IOTDB_REST_USER
# - IOTDB_REST_PASSWORD
# - IOTDB_REST_ALIGNED
# - IOTDB_REST_LOG_LEVEL
# - IOTDB_REST_LOG_FORMAT

[database]
# IoTDB REST service host
host = "127.0.0.1"

# REST service port
port = 18080

# URL scheme
scheme = "http"

# Basic authentication credentials
username = "root"
password = "root"

# Per-request timeout in milliseconds
request_timeout_ms = 60000

[workload]
# Insert tablets as aligned timeseries
sensor_ts_alignment = true

# Aggregate used by AGG_RANGE, AGG_VALUE and GROUP_BY queries
query_aggregate_function = "count"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
