//! Error types for the TUI.

use crate::api_client::ApiClientError;
use crate::config::ConfigError;
use tictac_core::GameError;

#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiClientError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
