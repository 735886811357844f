//! CLI error type.

use foiltune::config::ConfigError;
use foiltune::logging::LoggingError;
use foiltune::query::QueryError;
use thiserror::Error;

/// Errors surfaced to the user by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    ConfigFile(#[from] ConfigError),

    #[error("Invalid setup: {0}")]
    Query(#[from] QueryError),

    #[error("Failed to initialise logging: {0}")]
    Logging(#[from] LoggingError),

    #[error("Failed to serialise output: {0}")]
    Json(#[from] serde_json::Error),
}
