//! TOML-based application configuration for PromoGen.
//!
//! Reads `AppConfig` from the platform-appropriate config file:
//! - Windows:  `%APPDATA%\PromoGen\config.toml`
//! - Linux:    `~/.config/promogen/config.toml`
//! - macOS:    `~/Library/Application Support/PromoGen/config.toml`
//!
//! The file is optional and controls *where* PromoGen keeps its data and how
//! much it logs.  The promo-code template itself is not configured here; it
//! lives in the JSON settings document managed by
//! [`JsonFileStore`](super::json_store::JsonFileStore).
//!
//! ```toml
//! [storage]
//! data_dir = "/home/me/promo"
//! settings_file = "promo_settings.json"
//! history_file = "promo_history.json"
//!
//! [logging]
//! level = "warn"
//! ```
//!
//! # Serde default values
//!
//! Every section and field has a default, so an empty file, a file with only
//! `[logging]`, and no file at all are all valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::json_store::{JsonFileStore, HISTORY_FILE_NAME, SETTINGS_FILE_NAME};

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the settings and history documents live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Directory holding both documents.  Falls back to the platform config
    /// directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// File name of the settings document inside the data directory.
    #[serde(default = "default_settings_file")]
    pub settings_file: String,
    /// File name of the history document inside the data directory.
    #[serde(default = "default_history_file")]
    pub history_file: String,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` filter used when `RUST_LOG` is unset, e.g. `"warn"` or
    /// `"promogen_cli=debug"`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_settings_file() -> String {
    SETTINGS_FILE_NAME.to_string()
}
fn default_history_file() -> String {
    HISTORY_FILE_NAME.to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            settings_file: default_settings_file(),
            history_file: default_history_file(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl StorageConfig {
    /// Opens the JSON store for `data_dir` using the configured file names.
    pub fn open_store(&self, data_dir: &Path) -> JsonFileStore {
        JsonFileStore::new(
            data_dir.join(&self.settings_file),
            data_dir.join(&self.history_file),
        )
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `AppConfig` from the platform config file.
///
/// Returns `AppConfig::default()` if the file does not exist or no platform
/// config directory is available.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    match config_file_path() {
        Ok(path) => load_config_from(&path),
        Err(ConfigError::NoPlatformConfigDir) => Ok(AppConfig::default()),
        Err(e) => Err(e),
    }
}

/// Loads `AppConfig` from `path`, returning defaults if the file is absent.
///
/// # Errors
///
/// Same as [`load_config`].
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Picks the data directory: the command-line override, then
/// `storage.data_dir`, then the platform config directory, then the current
/// directory.
pub fn resolve_data_dir(cli_override: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    cli_override
        .or_else(|| config.storage.data_dir.clone())
        .or_else(platform_config_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolves the platform config base directory including the `PromoGen` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("PromoGen"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("promogen"))
    }

    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/PromoGen
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("PromoGen")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
