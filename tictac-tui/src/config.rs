//! Configuration loading for the TICTAC TUI.
//!
//! All fields are required unless explicitly marked optional. No defaults.

use crate::notifications::{HidePolicy, StatusSettings};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictac_core::MAX_HANDLE_LEN;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    pub player_handle: String,
    pub request_timeout_ms: u64,
    pub refresh_interval_ms: u64,
    pub persistence_path: PathBuf,
    pub log_path: PathBuf,
    pub backend: BackendConfig,
    pub status: StatusConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    pub kind: BackendKind,
    /// Required when `kind = "remote"`.
    pub api_base_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    Local,
    Remote,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusConfig {
    pub display_ms: u64,
    pub hide_policy: HidePolicy,
}

impl StatusConfig {
    pub fn settings(&self) -> StatusSettings {
        StatusSettings {
            display: Duration::from_millis(self.display_ms),
            hide_policy: self.hide_policy,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or TICTAC_TUI_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let path = path.ok_or(ConfigError::MissingConfigPath)?;
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: TuiConfig = toml::from_str(contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let handle = self.player_handle.trim();
        if handle.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "player_handle",
                reason: "must not be empty".to_string(),
            });
        }
        if handle.chars().count() > MAX_HANDLE_LEN {
            return Err(ConfigError::InvalidValue {
                field: "player_handle",
                reason: format!("must be at most {} characters", MAX_HANDLE_LEN),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "refresh_interval_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.persistence_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "persistence_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.status.display_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "status.display_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.backend.kind == BackendKind::Remote {
            let url = self.backend.api_base_url.as_deref().unwrap_or("");
            if url.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "backend.api_base_url",
                    reason: "required for the remote backend".to_string(),
                });
            }
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    field: "backend.api_base_url",
                    reason: "must start with http:// or https://".to_string(),
                });
            }
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("TICTAC_TUI_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
