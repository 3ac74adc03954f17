// log_level.rs
// Purpose: Severity ordering used to decide whether a record is emitted

use crate::errors::LogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// LogLevel classifies the severity of log output.
///
/// Declaration order is the filtering order: a logger emits a call when its
/// threshold is less than or equal to the call's level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum LogLevel {
    /// Threshold that lets every level through.
    Undefined,
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Undefined,
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Canonical name written to the `level` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Undefined => "Undefined",
            LogLevel::Trace => "Trace",
            LogLevel::Debug => "Debug",
            LogLevel::Info => "Info",
            LogLevel::Warn => "Warn",
            LogLevel::Error => "Error",
        }
    }

    /// True when a logger with this threshold emits a call at `level`.
    pub fn allows(&self, level: LogLevel) -> bool {
        *self <= level
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(input: &str) -> Result<LogLevel, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "undefined" => Ok(LogLevel::Undefined),
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(LogError::invalid_level(input)),
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => LogLevel::Trace,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Info,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Error => LogLevel::Error,
        }
    }
}

impl LogLevel {
    /// Most verbose `log` crate filter that still passes this threshold.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Undefined | LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}
