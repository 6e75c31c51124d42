//! Configuration file loading with precedence handling.

use crate::parser::DEFAULT_MAX_ELEMENTS;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Hard ceiling for `max_elements` from any source.
pub const MAX_ELEMENTS_LIMIT: usize = 100;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a regular file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A `[keybindings]` entry names a key that cannot be recognised.
    #[error("Unknown key {key:?} bound to {action}")]
    InvalidKey {
        /// Action the key was bound to.
        action: String,
        /// Key text as written in the config file.
        key: String,
    },

    /// A setting is outside its permitted range.
    #[error("max_elements must be between 1 and {limit}, got {0}", limit = MAX_ELEMENTS_LIMIT)]
    MaxElementsOutOfRange(usize),
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/bsviz/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Largest element count accepted by the input form.
    #[serde(default)]
    pub max_elements: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Disable colours regardless of terminal support.
    #[serde(default)]
    pub no_color: Option<bool>,

    /// Replacement keys for visualizer actions.
    #[serde(default)]
    pub keybindings: Option<KeybindingsConfig>,
}

/// `[keybindings]` table: each listed action replaces its default keys.
///
/// ```toml
/// [keybindings]
/// step = ["space", "j"]
/// quit = ["q", "esc"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KeybindingsConfig {
    #[serde(default)]
    pub step: Option<Vec<String>>,
    #[serde(default)]
    pub reset: Option<Vec<String>>,
    #[serde(default)]
    pub help: Option<Vec<String>>,
    #[serde(default)]
    pub quit: Option<Vec<String>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Largest element count accepted by the input form.
    pub max_elements: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Colours disabled.
    pub no_color: bool,
    /// Key overrides from the config file, unparsed.
    pub keybindings: KeybindingsConfig,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            max_elements: DEFAULT_MAX_ELEMENTS,
            log_file_path: default_log_path(),
            no_color: false,
            keybindings: KeybindingsConfig::default(),
        }
    }
}

impl ResolvedConfig {
    /// Check cross-source invariants once every override has been applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MaxElementsOutOfRange`] when `max_elements` is
    /// zero or above [`MAX_ELEMENTS_LIMIT`].
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(1..=MAX_ELEMENTS_LIMIT).contains(&self.max_elements) {
            return Err(ConfigError::MaxElementsOutOfRange(self.max_elements));
        }
        Ok(self)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/bsviz/bsviz.log` on Linux, the platform
/// equivalent elsewhere, or `bsviz.log` in the current directory when no
/// state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("bsviz").join("bsviz.log")
    } else {
        PathBuf::from("bsviz.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `None` if the platform config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bsviz").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `BSVIZ_CONFIG` environment variable
/// 3. Default path `~/.config/bsviz/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("BSVIZ_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        max_elements: config.max_elements.unwrap_or(defaults.max_elements),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        no_color: config.no_color.unwrap_or(defaults.no_color),
        keybindings: config.keybindings.unwrap_or(defaults.keybindings),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `BSVIZ_MAX_ELEMENTS`: Override element limit (ignored if not an integer)
/// - `BSVIZ_LOG_FILE`: Override log file path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(max) = std::env::var("BSVIZ_MAX_ELEMENTS")
        .ok()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
    {
        config.max_elements = max;
    }

    if let Ok(path) = std::env::var("BSVIZ_LOG_FILE") {
        config.log_file_path = PathBuf::from(path);
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user explicitly set
/// are applied.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    max_elements_override: Option<usize>,
    no_color_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(max) = max_elements_override {
        config.max_elements = max;
    }

    if let Some(no_color) = no_color_override {
        config.no_color = no_color;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
