// memory_sink.rs
// Purpose: Keep emitted records in memory for inspection

use crate::errors::SinkError;
use crate::log_sink::{Context, LogSink};
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex};

pub type Record = Map<String, Value>;

/// Collects every record as an ordered JSON object.
///
/// Derived sinks push into the same buffer as their parent, so a test can hold
/// the root sink and observe records from any logger in its lineage.
#[derive(Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<Record>>>,
    context: Context,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records emitted so far.
    pub fn records(&self) -> Vec<Record> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn last(&self) -> Option<Record> {
        self.records.lock().ok()?.last().cloned()
    }

    /// Drains the buffer, returning what it held.
    pub fn take(&self) -> Vec<Record> {
        self.records
            .lock()
            .map(|mut records| std::mem::take(&mut *records))
            .unwrap_or_default()
    }
}

impl LogSink for MemorySink {
    fn log(&self, keyvals: &[Value]) -> Result<(), SinkError> {
        let record = self.context.render(keyvals);
        self.records
            .lock()
            .map_err(|_| SinkError::poisoned("memory sink records"))?
            .push(record);
        Ok(())
    }

    fn with(&self, keyvals: &[Value]) -> Arc<dyn LogSink> {
        Arc::new(Self {
            records: Arc::clone(&self.records),
            context: self.context.extend(keyvals),
        })
    }
}
