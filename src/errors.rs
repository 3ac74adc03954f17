//! Error types for kvlog
//!
//! Logging calls themselves never return errors. These types surface from the
//! parts of the crate that are allowed to fail: building sinks, parsing levels,
//! and the raw `LogSink::log` contract that `Logger` swallows.

use thiserror::Error;

/// Failure while a sink tries to emit a record
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("I/O operation failed: {operation}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization failed: {context}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Mutex lock failed: {resource}")]
    Poisoned { resource: String },
}

impl SinkError {
    /// Create an I/O error
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }

    /// Create a poisoned-lock error
    pub fn poisoned(resource: impl Into<String>) -> Self {
        Self::Poisoned {
            resource: resource.into(),
        }
    }
}

/// Main error type for the fallible, non-logging parts of the crate
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Invalid log level: {input}")]
    InvalidLevel { input: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Type alias for Result with LogError
pub type LogResult<T> = Result<T, LogError>;

impl LogError {
    /// Create an invalid level error
    pub fn invalid_level(input: impl Into<String>) -> Self {
        Self::InvalidLevel {
            input: input.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
