// json_sink.rs
// Purpose: Newline-delimited JSON records written to stdout, stderr, or a file

use crate::errors::SinkError;
use crate::log_sink::{Context, LogSink};
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Writes one JSON object per record.
///
/// Every sink derived through [`LogSink::with`] shares the same writer. Each
/// record is serialized before the lock is taken and written in one call, so
/// concurrent records never interleave inside a line.
#[derive(Clone)]
pub struct JsonSink {
    writer: SharedWriter,
    context: Context,
}

impl JsonSink {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
            context: Context::new(),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Appends to `path`, creating the file if needed.
    pub fn file<P: AsRef<Path>>(path: P) -> Result<Self, SinkError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| SinkError::io(format!("open log file {}", path.display()), e))?;
        Ok(Self::new(file))
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    fn encode(&self, keyvals: &[Value]) -> Result<Vec<u8>, SinkError> {
        let object = self.context.render(keyvals);
        let mut line = serde_json::to_vec(&object)
            .map_err(|e| SinkError::serialization("encode log record", e))?;
        line.push(b'\n');
        Ok(line)
    }
}

impl LogSink for JsonSink {
    fn log(&self, keyvals: &[Value]) -> Result<(), SinkError> {
        let line = self.encode(keyvals)?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| SinkError::poisoned("json sink writer"))?;
        writer
            .write_all(&line)
            .map_err(|e| SinkError::io("write log record", e))?;
        writer.flush().map_err(|e| SinkError::io("flush log record", e))
    }

    fn with(&self, keyvals: &[Value]) -> Arc<dyn LogSink> {
        Arc::new(Self {
            writer: Arc::clone(&self.writer),
            context: self.context.extend(keyvals),
        })
    }
}
