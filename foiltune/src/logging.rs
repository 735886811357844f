//! Logging initialisation.
//!
//! Installs a global `tracing` subscriber. The filter comes from `RUST_LOG`
//! when it is set, otherwise from [`LoggingConfig::level`]. Events always go
//! to stderr; when [`LoggingConfig::directory`] is set they are also written
//! to `<directory>/foiltune.log` through a non-blocking writer.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// File name used inside the configured log directory.
pub const LOG_FILE_NAME: &str = "foiltune.log";

/// Errors that can occur while setting up logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Logging already initialised: {0}")]
    AlreadyInitialized(String),
}

/// Keeps the background log-file writer alive. Dropping it flushes pending
/// events, so hold it until the program exits.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Filter directive derived from the configuration.
pub fn default_directive(config: &LoggingConfig) -> String {
    config.level.as_str().to_lowercase()
}

/// Installs the global subscriber.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard, LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let stderr_layer = fmt::layer().with_writer(io::stderr).with_target(false);

    let (file_layer, file_guard) = match &config.directory {
        Some(dir) => {
            fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDirectory {
                path: dir.clone(),
                source,
            })?;
            let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tracing::Level;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(&LoggingConfig::default()), "warn");

        let config = LoggingConfig {
            level: Level::DEBUG,
            directory: None,
        };
        assert_eq!(default_directive(&config), "debug");
    }

    #[test]
    fn test_init_creates_log_directory_once() {
        let dir = TempDir::new().unwrap();
        let log_dir = dir.path().join("logs");
        let config = LoggingConfig {
            level: Level::INFO,
            directory: Some(log_dir.clone()),
        };

        let guard = init_logging(&config).unwrap();
        assert!(log_dir.is_dir());

        // A second global subscriber is refused.
        let err = init_logging(&LoggingConfig::default()).err();
        assert!(matches!(err, Some(LoggingError::AlreadyInitialized(_))));
        drop(guard);
    }
}
