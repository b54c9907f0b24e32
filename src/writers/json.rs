//! JSON writer for structured logging

use crate::core::{LoggerError, OutputFormat, Record, RecordWriter, Result, TimestampFormat};
use std::io::{self, Write};

/// Writes each record as a single-line JSON object (JSONL)
///
/// Compatible with log aggregation tools like ELK, Loki, etc.
#[derive(Debug, Clone)]
pub struct JsonWriter<W> {
    out: W,
}

impl<W: Write + Send> JsonWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl JsonWriter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> RecordWriter for JsonWriter<W> {
    fn write(&mut self, record: &Record, timestamp_format: &TimestampFormat) -> Result<()> {
        let mut line = OutputFormat::Json.format(record, timestamp_format);
        line.push('\n');
        // one write_all per record keeps lines whole on shared streams
        self.out
            .write_all(line.as_bytes())
            .map_err(|e| LoggerError::io_operation("writing record", e.to_string(), e))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }
}
