//! Library root for the `kvlog` crate
//!
//! Leveled, structured logging: a [`Logger`] filters by [`LogLevel`], renders the
//! message, stamps it with an RFC3339 time and hands a flat key-value record to a
//! [`LogSink`]. Context is added by deriving new loggers with [`Logger::with`],
//! never by mutating a shared one.
//!
//! ```rust,ignore
//! use kvlog::{JsonSink, LogLevel, Logger};
//!
//! let log = Logger::from_sink(JsonSink::stdout(), LogLevel::Info).with_method("Save");
//! kvlog::error!(logger: log, "failed: {}", "disk full");
//! // {"ts":"2024-05-01T09:30:00+02:00","level":"Error","message":"failed: disk full","method":"Save"}
//! ```

// Core error handling
pub mod errors;

// Levels and the logger value
pub mod log_level;
pub mod logger;

// Sinks
pub mod json_sink;
pub mod log_sink;
pub mod memory_sink;

// Configuration
pub mod config;

// Process-wide default and `log` crate integration
pub mod default_logger;
pub mod log_bridge;

mod macros;

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}


pub use config::{LoggerConfig, Target};
pub use errors::{LogError, LogResult, SinkError};
pub use json_sink::JsonSink;
pub use log_level::LogLevel;
pub use log_sink::{Context, LogSink, NoopSink};
pub use logger::Logger;
pub use memory_sink::{MemorySink, Record};
