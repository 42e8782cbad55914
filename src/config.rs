use crate::consts;
use crate::game::Bounds;
use log::LevelFilter;
use serde::Deserialize;
use std::num::{NonZeroU16, NonZeroU32};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Grid geometry & game speed
    #[serde(default)]
    pub(crate) grid: GridConfig,

    /// Where and how much to log
    #[serde(default)]
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized or contained invalid values.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                log::debug!("No configuration file at {}; using defaults", path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Validated grid settings.  Every value is positive.
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawGridConfig")]
pub(crate) struct GridConfig {
    /// Number of columns in the grid
    pub(crate) width: NonZeroU16,

    /// Number of rows in the grid
    pub(crate) height: NonZeroU16,

    /// Number of terminal columns used to draw one grid cell
    pub(crate) cell_width: NonZeroU16,

    /// Snake movements per second
    pub(crate) tick_rate: NonZeroU32,
}

impl GridConfig {
    pub(crate) fn bounds(&self) -> Bounds {
        Bounds::new(self.width.get(), self.height.get())
    }

    /// Time between movements of the snake
    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.get()
    }
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            width: NonZeroU16::new(consts::DEFAULT_GRID_WIDTH).unwrap_or(NonZeroU16::MIN),
            height: NonZeroU16::new(consts::DEFAULT_GRID_HEIGHT).unwrap_or(NonZeroU16::MIN),
            cell_width: NonZeroU16::new(consts::DEFAULT_CELL_WIDTH).unwrap_or(NonZeroU16::MIN),
            tick_rate: NonZeroU32::new(consts::DEFAULT_TICK_RATE).unwrap_or(NonZeroU32::MIN),
        }
    }
}

/// Grid settings as written in the file.  Values are read as wide signed
/// integers so that zero & negative values can be reported as such instead of
/// as type errors.
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
struct RawGridConfig {
    width: i64,
    height: i64,
    cell_width: i64,
    tick_rate: i64,
}

impl Default for RawGridConfig {
    fn default() -> RawGridConfig {
        RawGridConfig {
            width: i64::from(consts::DEFAULT_GRID_WIDTH),
            height: i64::from(consts::DEFAULT_GRID_HEIGHT),
            cell_width: i64::from(consts::DEFAULT_CELL_WIDTH),
            tick_rate: i64::from(consts::DEFAULT_TICK_RATE),
        }
    }
}

impl TryFrom<RawGridConfig> for GridConfig {
    type Error = InvalidSetting;

    fn try_from(value: RawGridConfig) -> Result<GridConfig, InvalidSetting> {
        Ok(GridConfig {
            width: positive_u16("grid.width", value.width)?,
            height: positive_u16("grid.height", value.height)?,
            cell_width: positive_u16("grid.cell-width", value.cell_width)?,
            tick_rate: positive_u32("grid.tick-rate", value.tick_rate)?,
        })
    }
}

fn positive_u16(key: &'static str, value: i64) -> Result<NonZeroU16, InvalidSetting> {
    if value <= 0 {
        return Err(InvalidSetting::not_positive(key, value));
    }
    u16::try_from(value)
        .ok()
        .and_then(NonZeroU16::new)
        .ok_or_else(|| InvalidSetting::too_large(key, value, u64::from(u16::MAX)))
}

fn positive_u32(key: &'static str, value: i64) -> Result<NonZeroU32, InvalidSetting> {
    if value <= 0 {
        return Err(InvalidSetting::not_positive(key, value));
    }
    u32::try_from(value)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| InvalidSetting::too_large(key, value, u64::from(u32::MAX)))
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawLogConfig")]
pub(crate) struct LogConfig {
    /// Maximum level of messages to write; `Off` disables logging entirely
    pub(crate) level: LevelFilter,

    /// File to log to instead of the default location
    pub(crate) file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            level: LevelFilter::Info,
            file: None,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
struct RawLogConfig {
    level: Option<String>,
    file: Option<PathBuf>,
}

impl TryFrom<RawLogConfig> for LogConfig {
    type Error = InvalidSetting;

    fn try_from(value: RawLogConfig) -> Result<LogConfig, InvalidSetting> {
        let level = match value.level {
            Some(s) => s.parse::<LevelFilter>().map_err(|_| InvalidSetting {
                key: "log.level",
                reason: format!(
                    "expected one of off, error, warn, info, debug, or trace; got {s:?}"
                ),
            })?,
            None => LevelFilter::Info,
        };
        Ok(LogConfig {
            level,
            file: value.file,
        })
    }
}

/// A configuration value that parsed but is not acceptable
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid value for {key}: {reason}")]
pub(crate) struct InvalidSetting {
    key: &'static str,
    reason: String,
}

impl InvalidSetting {
    fn not_positive(key: &'static str, value: i64) -> InvalidSetting {
        InvalidSetting {
            key,
            reason: format!("must be positive, got {value}"),
        }
    }

    fn too_large(key: &'static str, value: i64, max: u64) -> InvalidSetting {
        InvalidSetting {
            key,
            reason: format!("must be at most {max}, got {value}"),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
