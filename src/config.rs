//! Configuration system for IronCore Admin
//!
//! Supports multiple configuration sources with the following precedence (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (IRONCORE_* prefix)
//! 3. Configuration file (TOML)
//! 4. Default values

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::storage::StorageBackend;

/// Main admin configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Key-value storage settings
    pub storage: StorageSettings,

    /// Data-access behaviour
    pub api: ApiSettings,

    /// Logging configuration
    pub logging: LoggingSettings,
}

/// Storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Storage backend: file, memory
    pub backend: String,

    /// Directory holding one JSON file per collection
    pub data_dir: String,
}

/// Data-access settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Artificial latency applied to every store operation, in milliseconds
    pub latency_ms: u64,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Log file path (empty = no file logging)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Maximum log file size in MB before rotation
    pub max_file_size_mb: u64,

    /// Number of rotated log files to keep
    pub max_files: u32,

    /// Enable JSON formatted logging
    pub json_format: bool,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: "file".to_string(),
            data_dir: "~/.ironcore/admin/data".to_string(),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self { latency_ms: 400 }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
            max_file_size_mb: 100,
            max_files: 5,
            json_format: false,
        }
    }
}

/// Upper bound for the simulated latency
const MAX_LATENCY_MS: u64 = 60_000;

impl AdminConfig {
    /// Load configuration from file with environment variable overrides
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        // 1. Load from config file if it exists
        if let Some(path) = Self::find_config_file(config_path)? {
            debug!(path = %path.display(), "Loading configuration file");
            let content = fs::read_to_string(&path).map_err(|e| Error::IoRead {
                path: path.clone(),
                source: e,
            })?;
            config = toml::from_str(&content).map_err(|e| Error::ConfigParse {
                message: format!("{}: {}", path.display(), e.message()),
                source: Some(e),
            })?;
            info!(path = %path.display(), "Configuration loaded from file");
        }

        // 2. Apply environment variable overrides
        config.apply_env_overrides();

        // 3. Expand paths
        config.expand_paths();

        // 4. Validate
        config.validate()?;

        Ok(config)
    }

    /// Find the configuration file to use
    fn find_config_file(explicit_path: Option<&str>) -> Result<Option<PathBuf>> {
        // If explicit path provided, use it (error if not found)
        if let Some(path) = explicit_path {
            let path = PathBuf::from(expand_path(path));
            if path.exists() {
                return Ok(Some(path));
            }
            return Err(Error::config_not_found(path));
        }

        let search_paths = [
            // Current directory
            PathBuf::from("ironcore-admin.toml"),
            // User config directory
            dirs::config_dir()
                .map(|p| p.join("ironcore").join("admin.toml"))
                .unwrap_or_default(),
            // Home directory
            dirs::home_dir()
                .map(|p| p.join(".ironcore").join("admin.toml"))
                .unwrap_or_default(),
            // System config (Linux)
            PathBuf::from("/etc/ironcore/admin.toml"),
        ];

        for path in &search_paths {
            if !path.as_os_str().is_empty() && path.exists() {
                debug!(path = %path.display(), "Found configuration file");
                return Ok(Some(path.clone()));
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(None)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("IRONCORE_STORAGE_BACKEND") {
            self.storage.backend = val;
        }
        if let Ok(val) = std::env::var("IRONCORE_DATA_DIR") {
            self.storage.data_dir = val;
        }

        if let Ok(val) = std::env::var("IRONCORE_LATENCY_MS") {
            if let Ok(n) = val.parse() {
                self.api.latency_ms = n;
            }
        }

        if let Ok(val) = std::env::var("IRONCORE_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = std::env::var("IRONCORE_LOG_FILE") {
            self.logging.file = Some(val);
        }
        if let Ok(val) = std::env::var("IRONCORE_LOG_JSON") {
            self.logging.json_format = val.to_lowercase() == "true" || val == "1";
        }
    }

    /// Expand ~ and other path variables
    fn expand_paths(&mut self) {
        self.storage.data_dir = expand_path(&self.storage.data_dir);

        if let Some(ref file) = self.logging.file {
            self.logging.file = Some(expand_path(file));
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        self.storage
            .backend
            .parse::<StorageBackend>()
            .map_err(|e| Error::config_field_invalid("storage.backend", e))?;

        if self.storage.data_dir.trim().is_empty() {
            return Err(Error::config_field_invalid(
                "storage.data_dir",
                "data_dir cannot be empty",
            ));
        }

        if self.api.latency_ms > MAX_LATENCY_MS {
            return Err(Error::config_field_invalid(
                "api.latency_ms",
                format!("latency_ms must be at most {}", MAX_LATENCY_MS),
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::config_field_invalid(
                "logging.level",
                format!(
                    "Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_levels.join(", ")
                ),
            ));
        }

        Ok(())
    }

    /// The configured storage backend
    pub fn backend(&self) -> Result<StorageBackend> {
        self.storage
            .backend
            .parse()
            .map_err(|e: String| Error::config_field_invalid("storage.backend", e))
    }

    /// Get the data directory as a PathBuf
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.storage.data_dir)
    }

    /// The simulated per-operation latency
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.api.latency_ms)
    }
}

/// Expand ~ and environment variables in paths
fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .unwrap_or_else(|_| std::borrow::Cow::Borrowed(path))
        .into_owned()
}

/// Initialize a new configuration file
pub fn init_config(path: Option<&str>, force: bool) -> Result<PathBuf> {
    let config_path = path
        .map(|p| PathBuf::from(expand_path(p)))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".ironcore")
                .join("admin.toml")
        });

    if config_path.exists() && !force {
        return Err(Error::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            config_path.display()
        )));
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::IoWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(&config_path, generate_default_config()).map_err(|e| Error::IoWrite {
        path: config_path.clone(),
        source: e,
    })?;

    Ok(config_path)
}

/// Generate default configuration content with comments
fn generate_default_config() -> String {
    r#"# IronCore Admin Configuration

[storage]
# Storage backend: "file" (durable, one JSON file per collection) or "memory"
backend = "file"

# Directory holding the collection files
data_dir = "~/.ironcore/admin/data"

[api]
# Artificial latency applied to every store operation (milliseconds)
latency_ms = 400

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log file path (comment out to disable file logging)
# file = "~/.ironcore/admin/logs/admin.log"

# Maximum log file size in MB before rotation
max_file_size_mb = 100

# Number of rotated log files to keep
max_files = 5

# Enable JSON formatted logging
json_format = false
"#
    .to_string()
}
