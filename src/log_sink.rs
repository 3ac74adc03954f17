// log_sink.rs
// Purpose: The structured emission contract every Logger writes through

use crate::errors::SinkError;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Placeholder stored for a key that arrived without a value.
pub const MISSING_VALUE: &str = "(MISSING)";

/// A backend that turns a flat key-value sequence into one record.
///
/// `keyvals` alternates key and value. Implementations append their own
/// context after the caller's pairs, so the record reads in attachment order.
pub trait LogSink: Send + Sync {
    /// Emit a single record.
    fn log(&self, keyvals: &[Value]) -> Result<(), SinkError>;

    /// Derive a sink that adds `keyvals` to every record it emits.
    fn with(&self, keyvals: &[Value]) -> Arc<dyn LogSink>;
}

/// Fixed key-value pairs carried by a derived sink.
///
/// Cloning shares the underlying slice; extending allocates a new one, so a
/// parent's context is never touched by its children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    keyvals: Arc<[Value]>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new context with `keyvals` after the existing pairs.
    /// An odd-length addition is completed with [`MISSING_VALUE`].
    pub fn extend(&self, keyvals: &[Value]) -> Self {
        let mut merged = Vec::with_capacity(self.keyvals.len() + keyvals.len() + 1);
        merged.extend_from_slice(&self.keyvals);
        merged.extend_from_slice(keyvals);
        if merged.len() % 2 != 0 {
            merged.push(Value::String(MISSING_VALUE.to_string()));
        }
        Self {
            keyvals: merged.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keyvals.is_empty()
    }

    pub fn keyvals(&self) -> &[Value] {
        &self.keyvals
    }

    /// Builds the record object: caller pairs first, then the context pairs.
    ///
    /// A context key that repeats a caller key is dropped, so `ts`, `level` and
    /// `message` always carry the values produced at the call site.
    pub fn render(&self, keyvals: &[Value]) -> Map<String, Value> {
        let mut record = to_object(keyvals);
        for (key, value) in to_object(&self.keyvals) {
            if !record.contains_key(&key) {
                record.insert(key, value);
            }
        }
        record
    }
}

/// Folds a flat key-value sequence into an ordered JSON object.
///
/// Non-string keys are rendered with their JSON text. A repeated key keeps its
/// first position and takes the last value.
pub fn to_object(keyvals: &[Value]) -> Map<String, Value> {
    let mut object = Map::new();
    for pair in keyvals.chunks(2) {
        let key = match &pair[0] {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let value = pair
            .get(1)
            .cloned()
            .unwrap_or_else(|| Value::String(MISSING_VALUE.to_string()));
        object.insert(key, value);
    }
    object
}

/// Sink that discards every record.
#[derive(Debug, Clone, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    #[inline]
    fn log(&self, _keyvals: &[Value]) -> Result<(), SinkError> {
        Ok(())
    }

    fn with(&self, _keyvals: &[Value]) -> Arc<dyn LogSink> {
        Arc::new(NoopSink)
    }
}
