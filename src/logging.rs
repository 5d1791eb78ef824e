//! Diagnostic logging
//!
//! The terminal belongs to the UI, so diagnostics only go to a rolling file.

use std::path::PathBuf;
use std::str::FromStr;

use color_eyre::eyre::Result;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Log file name prefix
pub const LOG_FILENAME: &str = "svn-panel.log";

pub struct LogConfig {
    pub log_dir: PathBuf,
    /// Level used when RUST_LOG is not set
    pub log_level: Level,
    pub rotation: Rotation,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl LogConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            log_dir: config.log_dir(),
            log_level: config
                .log_level
                .as_deref()
                .map(parse_level)
                .unwrap_or(Level::INFO),
            rotation: Rotation::DAILY,
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("svn_panel={}", self.log_level)))
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log directory cannot be created.
pub fn init_logging(config: LogConfig) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir)?;

    let file_appender =
        RollingFileAppender::new(config.rotation.clone(), &config.log_dir, LOG_FILENAME);

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_target(true)
        .with_ansi(false)
        .with_filter(config.filter());

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}

/// Parse a level name, falling back to INFO
pub fn parse_level(s: &str) -> Level {
    Level::from_str(s.trim()).unwrap_or(Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_default() {
        let config = LogConfig::default();
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.log_dir.ends_with("logs"));
        assert!(config.log_dir.to_string_lossy().contains(".svn-panel"));
    }

    #[test]
    fn test_log_config_from_config() {
        let config = Config {
            log_dir: Some(PathBuf::from("/var/log/svn-panel")),
            log_level: Some("debug".to_string()),
            ..Config::default()
        };
        let log = LogConfig::from_config(&config);
        assert_eq!(log.log_dir, PathBuf::from("/var/log/svn-panel"));
        assert_eq!(log.log_level, Level::DEBUG);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("TRACE"), Level::TRACE);
        assert_eq!(parse_level("loud"), Level::INFO);
    }

    #[test]
    fn test_log_filename_constant() {
        assert_eq!(LOG_FILENAME, "svn-panel.log");
    }
}
