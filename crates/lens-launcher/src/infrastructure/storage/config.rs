//! TOML-based settings persistence for the launcher.
//!
//! Reads and writes [`AppConfig`] to the platform-appropriate settings file:
//! - Windows:  `%APPDATA%\LensLauncher\settings.toml`
//! - Linux:    `~/.config/lenslauncher/settings.toml`
//! - macOS:    `~/Library/Application Support/LensLauncher/settings.toml`
//!
//! Example file:
//!
//! ```toml
//! [lens]
//! lens_diameter = 600.0
//! min_icon_size = 18.0
//! distortion_factor = 2.5
//! scale_factor = 1.5
//! vibrate_app_launch = true
//!
//! [logging]
//! level = "info"
//! ```
//!
//! # Serde default values
//!
//! Every field has a `#[serde(default = ...)]`, so a missing file, an empty
//! file or a file written by an older version all load into a complete
//! configuration.
//!
//! # The settings store
//!
//! [`SettingsStore`] is the key/value view the rest of the launcher uses.
//! [`TomlSettingsStore`] writes through to disk on every save;
//! [`MemorySettingsStore`] keeps everything in memory for tests and embedders
//! that persist settings elsewhere.

use std::path::{Path, PathBuf};

use lens_core::{BoolKey, FloatKey, LensSettings, SettingsError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Name of the settings file inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The settings could not be serialized to TOML.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The key is unknown or the value is out of range.
    #[error(transparent)]
    Setting(#[from] SettingsError),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level launcher configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub lens: LensSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ── File access ───────────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the settings file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the settings file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join(SETTINGS_FILE_NAME))
}

/// Loads [`AppConfig`] from `path`, returning the defaults if the file does
/// not exist yet.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: AppConfig = toml::from_str(&content)?;
            debug!("loaded settings from {}", path.display());
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("no settings at {}, using defaults", path.display());
            Ok(AppConfig::default())
        }
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Persists `config` to `path`, creating the parent directory if needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config base directory including the app subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("LensLauncher"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("lenslauncher"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("LensLauncher")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Settings store ────────────────────────────────────────────────────────────

/// Key/value access to the lens settings.
///
/// Reads never fail: a key that was never saved reads as its default.  Saves
/// validate numeric values against [`FloatKey::limits`].
pub trait SettingsStore {
    fn get_float(&self, key: FloatKey) -> f32;

    fn get_bool(&self, key: BoolKey) -> bool;

    /// Validates and stores `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Setting`] for out-of-range values, or a
    /// persistence error from the backing store.
    fn save_float(&mut self, key: FloatKey, value: f32) -> Result<(), ConfigError>;

    /// Stores `value`.
    ///
    /// # Errors
    ///
    /// Returns a persistence error from the backing store.
    fn save_bool(&mut self, key: BoolKey, value: bool) -> Result<(), ConfigError>;

    /// A consistent copy of every setting, for one layout pass or frame.
    fn snapshot(&self) -> LensSettings;
}

/// Settings store kept entirely in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySettingsStore {
    settings: LensSettings,
}

impl MemorySettingsStore {
    pub fn new(settings: LensSettings) -> Self {
        Self { settings }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get_float(&self, key: FloatKey) -> f32 {
        self.settings.get_float(key)
    }

    fn get_bool(&self, key: BoolKey) -> bool {
        self.settings.get_bool(key)
    }

    fn save_float(&mut self, key: FloatKey, value: f32) -> Result<(), ConfigError> {
        let value = key.validate(value)?;
        self.settings.set_float(key, value);
        Ok(())
    }

    fn save_bool(&mut self, key: BoolKey, value: bool) -> Result<(), ConfigError> {
        self.settings.set_bool(key, value);
        Ok(())
    }

    fn snapshot(&self) -> LensSettings {
        self.settings
    }
}

/// Settings store backed by a TOML file.  Every save rewrites the file.
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
    config: AppConfig,
}

impl TomlSettingsStore {
    /// Opens the store at `path`, loading the current file if there is one.
    ///
    /// # Errors
    ///
    /// Propagates [`load_config`] errors.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let config = load_config(&path)?;
        Ok(Self { path, config })
    }

    /// Opens the store at the platform default location.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoPlatformConfigDir`] or a [`load_config`] error.
    pub fn open_default() -> Result<Self, ConfigError> {
        Self::open(config_file_path()?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The whole configuration, including the logging section.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Writes `updated` to disk and adopts it only once the write succeeded,
    /// so a failed save leaves the in-memory settings untouched.
    fn commit(&mut self, updated: AppConfig) -> Result<(), ConfigError> {
        save_config(&updated, &self.path)?;
        self.config = updated;
        info!("saved settings to {}", self.path.display());
        Ok(())
    }
}

impl SettingsStore for TomlSettingsStore {
    fn get_float(&self, key: FloatKey) -> f32 {
        self.config.lens.get_float(key)
    }

    fn get_bool(&self, key: BoolKey) -> bool {
        self.config.lens.get_bool(key)
    }

    fn save_float(&mut self, key: FloatKey, value: f32) -> Result<(), ConfigError> {
        let value = key.validate(value)?;
        let mut updated = self.config.clone();
        updated.lens.set_float(key, value);
        self.commit(updated)
    }

    fn save_bool(&mut self, key: BoolKey, value: bool) -> Result<(), ConfigError> {
        let mut updated = self.config.clone();
        updated.lens.set_bool(key, value);
        self.commit(updated)
    }

    fn snapshot(&self) -> LensSettings {
        self.config.lens
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
