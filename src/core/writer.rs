//! RecordWriter trait for log output destinations

use super::{error::Result, record::Record, timestamp::TimestampFormat};

/// Formats a [`Record`] and writes it to an output stream.
///
/// A writer is only ever driven by one caller at a time (the sink wraps it in
/// a mutex), so each `write` must emit a complete record.
pub trait RecordWriter: Send {
    fn write(&mut self, record: &Record, timestamp_format: &TimestampFormat) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
