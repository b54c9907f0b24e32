//! Record sink: level gate, permanent fields and the shared writer

use super::{
    error::Result, field::Fields, log_level::LogLevel, record::Record, timestamp::TimestampFormat,
    writer::RecordWriter,
};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Exit code used after a fatal record has been written
pub const FATAL_EXIT_CODE: i32 = 1;

/// Where a logger's records end up.
///
/// Cloning is cheap: clones share the writer and the permanent field set.
/// Changing the permanent fields goes through [`Sink::with_fields`], which
/// returns a new sink and leaves existing clones untouched.
#[derive(Clone)]
pub struct Sink {
    min_level: LogLevel,
    writer: Arc<Mutex<Box<dyn RecordWriter>>>,
    timestamp_format: Arc<TimestampFormat>,
    fields: Arc<Fields>,
}

impl Sink {
    pub fn new(
        min_level: LogLevel,
        writer: Box<dyn RecordWriter>,
        timestamp_format: TimestampFormat,
    ) -> Self {
        Self {
            min_level,
            writer: Arc::new(Mutex::new(writer)),
            timestamp_format: Arc::new(timestamp_format),
            fields: Arc::new(Fields::new()),
        }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Permanent fields attached to every record
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    /// Copy of this sink, sharing the writer, with `fields` as the permanent set
    #[must_use]
    pub fn with_fields(&self, fields: Fields) -> Sink {
        Sink {
            min_level: self.min_level,
            writer: Arc::clone(&self.writer),
            timestamp_format: Arc::clone(&self.timestamp_format),
            fields: Arc::new(fields),
        }
    }

    /// Emit one record.
    ///
    /// Below the minimum level this is a no-op. Otherwise the permanent
    /// fields are merged with `call_fields` (call-scoped values win), the
    /// record is stamped and written under the writer lock. A fatal record
    /// flushes the writer and exits the process.
    pub fn emit(&self, level: LogLevel, message: impl Into<String>, call_fields: &Fields) {
        if !self.enabled(level) {
            return;
        }

        let fields = if call_fields.is_empty() {
            (*self.fields).clone()
        } else {
            self.fields.merged_with(call_fields)
        };
        let record = Record::new(level, message, fields);

        let mut writer = self.writer.lock();
        Self::write_isolated(&mut writer, &record, &self.timestamp_format);

        if level == LogLevel::Fatal {
            if let Err(e) = writer.flush() {
                eprintln!("[LOGGER ERROR] Writer '{}' flush failed: {}", writer.name(), e);
            }
            drop(writer);
            std::process::exit(FATAL_EXIT_CODE);
        }
    }

    /// Write with panic isolation: a failing writer never takes the caller down
    fn write_isolated(
        writer: &mut Box<dyn RecordWriter>,
        record: &Record,
        timestamp_format: &TimestampFormat,
    ) {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            writer.write(record, timestamp_format)
        }));

        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Writer '{}' failed: {}", writer.name(), e);
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Writer '{}' panicked: {}. Record dropped.",
                    writer.name(),
                    panic_msg
                );
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("min_level", &self.min_level)
            .field("writer", &self.writer.lock().name())
            .field("timestamp_format", &self.timestamp_format)
            .field("fields", &self.fields)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldValue, LoggerError};
    use crate::writers::{JsonWriter, SharedBuffer};

    fn buffered_sink(level: LogLevel) -> (Sink, SharedBuffer) {
        let buf = SharedBuffer::new();
        let sink = Sink::new(
            level,
            Box::new(JsonWriter::new(buf.clone())),
            TimestampFormat::Nanos,
        );
        (sink, buf)
    }

    #[test]
    fn test_below_min_level_is_dropped() {
        let (sink, buf) = buffered_sink(LogLevel::Warn);

        sink.emit(LogLevel::Info, "hidden", &Fields::new());
        assert!(buf.is_empty());

        sink.emit(LogLevel::Warn, "shown", &Fields::new());
        assert_eq!(buf.lines().len(), 1);
    }

    #[test]
    fn test_with_fields_is_copy_on_write() {
        let (sink, buf) = buffered_sink(LogLevel::Info);
        let tagged = sink.with_fields(Fields::new().with_field("env", "prod"));

        sink.emit(LogLevel::Info, "plain", &Fields::new());
        tagged.emit(LogLevel::Info, "tagged", &Fields::new());

        let lines = buf.lines();
        assert!(!lines[0].contains("env"));
        assert!(lines[1].contains(r#""env":"prod""#));
        assert!(sink.fields().is_empty());
    }

    #[test]
    fn test_call_fields_override_permanent() {
        let (sink, buf) = buffered_sink(LogLevel::Info);
        let sink = sink.with_fields(Fields::new().with_field("key", "permanent"));

        sink.emit(
            LogLevel::Info,
            "override",
            &Fields::new().with_field("key", "call"),
        );

        let parsed: serde_json::Value = serde_json::from_str(&buf.lines()[0]).unwrap();
        assert_eq!(parsed["key"], "call");
        assert_eq!(sink.fields().get("key"), Some(&FieldValue::from("permanent")));
    }

    struct FailingWriter;

    impl RecordWriter for FailingWriter {
        fn write(&mut self, _record: &Record, _ts: &TimestampFormat) -> Result<()> {
            Err(LoggerError::writer("simulated failure"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct PanickingWriter;

    impl RecordWriter for PanickingWriter {
        fn write(&mut self, _record: &Record, _ts: &TimestampFormat) -> Result<()> {
            panic!("writer exploded");
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    #[test]
    fn test_writer_failures_do_not_reach_caller() {
        let failing = Sink::new(LogLevel::Info, Box::new(FailingWriter), TimestampFormat::Nanos);
        failing.emit(LogLevel::Error, "lost", &Fields::new());

        let panicking =
            Sink::new(LogLevel::Info, Box::new(PanickingWriter), TimestampFormat::Nanos);
        panicking.emit(LogLevel::Error, "lost", &Fields::new());
        // the lock is still usable after the panic
        panicking.emit(LogLevel::Error, "lost again", &Fields::new());
        assert!(panicking.flush().is_ok());
    }
}
