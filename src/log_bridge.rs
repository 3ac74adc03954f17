//! Routes records from the `log` crate facade into a [`Logger`].
//!
//! The `log` record target is attached as a `target` field after any context
//! the logger already carries.

use crate::errors::{LogError, LogResult};
use crate::log_level::LogLevel;
use crate::logger::Logger;

pub const TARGET_KEY: &str = "target";

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        Logger::enabled(self, LogLevel::from(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        let level = LogLevel::from(record.level());
        if !Logger::enabled(self, level) {
            return;
        }
        self.with([TARGET_KEY, record.target()])
            .emit(level, *record.args());
    }

    fn flush(&self) {}
}

/// Installs `logger` as the global `log` logger.
///
/// Fails if another `log` implementation was installed first.
pub fn init(logger: Logger) -> LogResult<()> {
    let max_level = logger.level().to_level_filter();
    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| LogError::config(format!("log bridge: {e}")))?;
    log::set_max_level(max_level);
    Ok(())
}
