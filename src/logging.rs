//! Log bootstrapping from `LOG_FILE` and `LOG_LEVEL`
//!
//! Library code only uses the `log` macros. The binary calls [`LogConfig::init`]
//! once at startup to install an `env_logger` backend.

use chrono::Local;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Verbosity selected by `LOG_LEVEL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// `0`, and any value that is not `0`, `1` or `2`
    #[default]
    Silent,
    /// `1`
    Info,
    /// `2`
    Debug,
}

impl LogLevel {
    /// Parse a `LOG_LEVEL` value. Anything unrecognized is [`LogLevel::Silent`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "1" => Self::Info,
            "2" => Self::Debug,
            _ => Self::Silent,
        }
    }

    #[must_use]
    pub fn filter(&self) -> LevelFilter {
        match self {
            Self::Silent => LevelFilter::Off,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
        }
    }
}

/// Errors raised while installing the logger
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger already installed: {0}")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

/// Where and how much to log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LogLevel,
    /// Append to this file instead of writing to stderr
    pub file: Option<PathBuf>,
}

impl LogConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("LOG_LEVEL").ok().as_deref(),
            std::env::var("LOG_FILE").ok().as_deref(),
        )
    }

    /// Build from raw `LOG_LEVEL` / `LOG_FILE` values.
    #[must_use]
    pub fn from_vars(level: Option<&str>, file: Option<&str>) -> Self {
        Self {
            level: level.map(LogLevel::parse).unwrap_or_default(),
            file: file
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Install the global logger.
    ///
    /// With a log file its parent directories are created and lines are
    /// appended as `[YYYY-MM-DD HH:MM:SS] LEVEL: message`.
    pub fn init(&self) -> Result<(), LoggingError> {
        let mut builder = Builder::new();
        builder.filter_level(self.level.filter());
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        });

        match &self.file {
            Some(path) => {
                let file = open_log_file(path).map_err(|source| LoggingError::File {
                    path: path.clone(),
                    source,
                })?;
                builder.target(Target::Pipe(Box::new(file)));
            }
            None => {
                builder.target(Target::Stderr);
            }
        }

        builder.try_init()?;
        Ok(())
    }
}

fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
