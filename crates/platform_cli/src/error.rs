//! CLI error types.

use platform_market::MarketDataError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Snapshot file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Argument combination the command cannot serve
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Market data lookup or validation failure
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    /// Output could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
