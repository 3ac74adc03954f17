//! Level macros that skip argument evaluation below the threshold.
//!
//! Each macro takes an optional `logger: <expr>,` prefix. Without it the call
//! goes to the current default logger.
//!
//! ```rust,ignore
//! kvlog::info!(logger: log, "saved {} rows", rows);
//! kvlog::warn!("disk at {}%", pct);
//! ```

#[macro_export]
macro_rules! log_at {
    (logger: $logger:expr, $lvl:expr, $($arg:tt)+) => {{
        let __logger = &$logger;
        let __lvl: $crate::LogLevel = $lvl;
        if __logger.enabled(__lvl) {
            __logger.emit(__lvl, format_args!($($arg)+));
        }
    }};
    ($lvl:expr, $($arg:tt)+) => {{
        $crate::log_at!(logger: $crate::default_logger::current(), $lvl, $($arg)+)
    }};
}

#[macro_export]
macro_rules! trace {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::log_at!(logger: $logger, $crate::LogLevel::Trace, $($arg)+) };
    ($($arg:tt)+) => { $crate::log_at!($crate::LogLevel::Trace, $($arg)+) };
}

#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::log_at!(logger: $logger, $crate::LogLevel::Debug, $($arg)+) };
    ($($arg:tt)+) => { $crate::log_at!($crate::LogLevel::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::log_at!(logger: $logger, $crate::LogLevel::Info, $($arg)+) };
    ($($arg:tt)+) => { $crate::log_at!($crate::LogLevel::Info, $($arg)+) };
}

#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::log_at!(logger: $logger, $crate::LogLevel::Warn, $($arg)+) };
    ($($arg:tt)+) => { $crate::log_at!($crate::LogLevel::Warn, $($arg)+) };
}

#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::log_at!(logger: $logger, $crate::LogLevel::Error, $($arg)+) };
    ($($arg:tt)+) => { $crate::log_at!($crate::LogLevel::Error, $($arg)+) };
}

/// Builds a `Vec<serde_json::Value>` for [`Logger::with`](crate::Logger::with)
/// from mixed key and value expressions.
///
/// ```rust,ignore
/// let log = log.with(kvlog::keyvals!["user", user_id, "retries", 3]);
/// ```
#[macro_export]
macro_rules! keyvals {
    ($($item:expr),* $(,)?) => {
        ::std::vec![$(
            $crate::__private::serde_json::to_value(&$item)
                .unwrap_or($crate::__private::serde_json::Value::Null)
        ),*]
    };
}
