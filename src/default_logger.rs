// default_logger.rs
// Purpose: Process-wide logger for callers that do not wire one explicitly

use crate::config::LoggerConfig;
use crate::errors::LogResult;
use crate::json_sink::JsonSink;
use crate::log_level::LogLevel;
use crate::logger::Logger;
use lazy_static::lazy_static;
use std::fmt;
use std::sync::{PoisonError, RwLock};

lazy_static! {
    static ref DEFAULT_LOGGER: RwLock<Logger> =
        RwLock::new(Logger::from_sink(JsonSink::stdout(), LogLevel::Info));
}

/// The logger free functions currently delegate to.
///
/// The returned value is a snapshot: a later [`set_default`] does not affect it.
pub fn current() -> Logger {
    DEFAULT_LOGGER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replaces the default logger and returns the previous one.
///
/// This is the only way to enrich the default for every caller; the free
/// `with*` functions below never write back.
pub fn set_default(logger: Logger) -> Logger {
    let mut slot = DEFAULT_LOGGER
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *slot, logger)
}

/// Builds a logger from `config` and installs it as the default.
pub fn init(config: &LoggerConfig) -> LogResult<()> {
    set_default(config.build()?);
    Ok(())
}

pub fn with<I, V>(keyvals: I) -> Logger
where
    I: IntoIterator<Item = V>,
    V: Into<serde_json::Value>,
{
    current().with(keyvals)
}

pub fn with_method(name: impl Into<String>) -> Logger {
    current().with_method(name)
}

pub fn with_level(level: LogLevel) -> Logger {
    current().with_level(level)
}

pub fn println(message: &str) {
    current().println(message);
}

pub fn printf(args: fmt::Arguments<'_>) {
    current().printf(args);
}

pub fn trace(args: fmt::Arguments<'_>) {
    current().trace(args);
}

pub fn debug(args: fmt::Arguments<'_>) {
    current().debug(args);
}

pub fn info(args: fmt::Arguments<'_>) {
    current().info(args);
}

pub fn warn(args: fmt::Arguments<'_>) {
    current().warn(args);
}

pub fn error(args: fmt::Arguments<'_>) {
    current().error(args);
}
