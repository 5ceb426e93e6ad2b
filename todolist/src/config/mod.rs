//! Configuration system for the `todolist` client.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/todolist/config.toml`)
//! 4. Compiled defaults
//!
//! Missing config file is not an error (defaults are used). An explicit
//! `--config` path that doesn't exist is an error.

use std::path::PathBuf;
use std::time::Duration;

use todolist_core::view::DEFAULT_EMPTY_MESSAGE;

use crate::notice::DEFAULT_NOTICE_DURATION;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    ui: UiFileConfig,
}

/// `[ui]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct UiFileConfig {
    poll_timeout_ms: Option<u64>,
    notice_duration_ms: Option<u64>,
    title: Option<String>,
    empty_message: Option<String>,
}

/// Default screen title.
pub const DEFAULT_TITLE: &str = "TODO List";

/// Fully resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Poll timeout for the TUI event loop.
    pub poll_timeout: Duration,
    /// How long a transient notice stays visible.
    pub notice_duration: Duration,
    /// Screen title.
    pub title: String,
    /// Placeholder shown when there are no active tasks.
    pub empty_message: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(50),
            notice_duration: DEFAULT_NOTICE_DURATION,
            title: DEFAULT_TITLE.to_string(),
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an error.
    /// If no `--config` is given, the default path
    /// (`~/.config/todolist/config.toml`) is tried and silently ignored if
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be read or parsed.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Ok(Self::resolve(cli, &file))
    }

    /// Resolve a `ClientConfig` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default.
    #[must_use]
    fn resolve(cli: &CliArgs, file: &ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            poll_timeout: cli
                .poll_timeout_ms
                .or(file.ui.poll_timeout_ms)
                .map_or(defaults.poll_timeout, Duration::from_millis),
            notice_duration: cli
                .notice_duration_ms
                .or(file.ui.notice_duration_ms)
                .map_or(defaults.notice_duration, Duration::from_millis),
            title: file.ui.title.clone().unwrap_or(defaults.title),
            empty_message: file
                .ui
                .empty_message
                .clone()
                .unwrap_or(defaults.empty_message),
        }
    }
}

/// CLI arguments parsed by clap.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Terminal to-do list")]
pub struct CliArgs {
    /// Path to config file (default: `~/.config/todolist/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Event loop poll timeout in milliseconds.
    #[arg(long)]
    pub poll_timeout_ms: Option<u64>,

    /// How long validation notices stay visible, in milliseconds.
    #[arg(long)]
    pub notice_duration_ms: Option<u64>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "TODOLIST_LOG")]
    pub log_level: String,

    /// Path to log file (default: `$TMPDIR/todolist.log`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Load and parse a TOML config file.
///
/// If `explicit_path` is `Some`, the file must exist (error if not).
/// If `explicit_path` is `None`, the default path is tried and missing file
/// is treated as empty config.
fn load_config_file(explicit_path: Option<&std::path::Path>) -> Result<ConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            // No config dir available — use defaults.
            return Ok(ConfigFile::default());
        };
        config_dir.join("todolist").join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}
