// config.rs
// Purpose: Declarative description of a logger for embedding applications

use crate::errors::{LogError, LogResult};
use crate::json_sink::JsonSink;
use crate::log_level::LogLevel;
use crate::log_sink::NoopSink;
use crate::logger::Logger;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where records go.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Stdout,
    Stderr,
    File(PathBuf),
    Discard,
}

/// Threshold and destination of a logger.
///
/// Defaults to `Info` on stdout, matching the process-wide default logger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub target: Target,
}

impl LoggerConfig {
    pub fn new(level: LogLevel, target: Target) -> Self {
        Self { level, target }
    }

    /// Opens the target and returns a logger writing JSON lines to it.
    pub fn build(&self) -> LogResult<Logger> {
        let logger = match &self.target {
            Target::Stdout => Logger::from_sink(JsonSink::stdout(), self.level),
            Target::Stderr => Logger::from_sink(JsonSink::stderr(), self.level),
            Target::File(path) => {
                if path.as_os_str().is_empty() {
                    return Err(LogError::config("log file path cannot be empty"));
                }
                Logger::from_sink(JsonSink::file(path)?, self.level)
            }
            Target::Discard => Logger::from_sink(NoopSink, self.level),
        };
        Ok(logger)
    }
}
