//! File-based logging using simplelog
//!
//! The terminal is taken over by the game, so log messages go to a file:
//! `<cache dir>/gridsnake/gridsnake.log` unless the configuration names
//! another one.  The file is truncated on every run.
use crate::config::LogConfig;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::path::PathBuf;
use thiserror::Error;

fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("gridsnake").join("gridsnake.log"))
}

/// Return the file that logging with `config` would write to, or `None` if
/// logging is disabled
fn log_path(config: &LogConfig) -> Result<Option<PathBuf>, LoggerError> {
    if config.level == LevelFilter::Off {
        return Ok(None);
    }
    config
        .file
        .clone()
        .or_else(default_log_path)
        .map(Some)
        .ok_or(LoggerError::NoPath)
}

/// Install a global logger as described by `config`.  Returns the path to the
/// log file, or `None` if logging is disabled.
pub(crate) fn init(config: &LogConfig) -> Result<Option<PathBuf>, LoggerError> {
    let Some(path) = log_path(config)? else {
        return Ok(None);
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).map_err(LoggerError::Mkdir)?;
    }
    let file = fs_err::File::create(&path).map_err(LoggerError::Create)?;
    let logconfig = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c)
        .build();
    WriteLogger::init(config.level, logconfig, file)?;
    Ok(Some(path))
}

#[derive(Debug, Error)]
pub(crate) enum LoggerError {
    #[error("failed to determine path to local cache directory")]
    NoPath,
    #[error("failed to create log directory")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to create log file")]
    Create(#[source] std::io::Error),
    #[error("failed to install logger")]
    Install(#[from] log::SetLoggerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled() {
        let config = LogConfig {
            level: LevelFilter::Off,
            file: Some(PathBuf::from("/nonexistent/snake.log")),
        };
        assert!(matches!(log_path(&config), Ok(None)));
        assert!(matches!(init(&config), Ok(None)));
    }

    #[test]
    fn configured_file() {
        let config = LogConfig {
            level: LevelFilter::Warn,
            file: Some(PathBuf::from("/var/tmp/snake.log")),
        };
        assert_eq!(
            log_path(&config).unwrap(),
            Some(PathBuf::from("/var/tmp/snake.log"))
        );
    }

    #[test]
    fn default_file() {
        let config = LogConfig::default();
        let path = log_path(&config);
        match default_log_path() {
            Some(p) => assert_eq!(path.unwrap(), Some(p)),
            None => assert!(matches!(path, Err(LoggerError::NoPath))),
        }
    }
}
