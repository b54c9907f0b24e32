//! Per-call field builder

use super::{
    error_field::{ErrorValue, StructuredError, ERROR_FIELD_KEY},
    field::{FieldValue, Fields},
    log_level::LogLevel,
    sink::Sink,
};

/// Accumulates call-scoped fields, then emits through its logger's sink.
///
/// Emission borrows the entry, so the same entry can emit several records;
/// each one carries every field accumulated so far. An entry keeps the sink
/// it was created from: permanent fields set on the logger afterwards do not
/// show up in it.
///
/// # Example
///
/// ```
/// use rtlog::{Logger, LoggerOption, JsonWriter, SharedBuffer};
///
/// let buf = SharedBuffer::new();
/// let logger = Logger::with_options([LoggerOption::writer(JsonWriter::new(buf.clone()))]);
///
/// logger
///     .entry()
///     .field("user_id", 12345)
///     .field("latency_ms", 42.5)
///     .info("Request processed");
///
/// assert!(buf.contents().contains(r#""user_id":12345"#));
/// ```
#[derive(Debug, Clone)]
#[must_use = "an entry does nothing until one of its level methods is called"]
pub struct Entry {
    sink: Sink,
    fields: Fields,
}

impl Entry {
    pub(crate) fn new(sink: Sink) -> Self {
        Self {
            sink,
            fields: Fields::new(),
        }
    }

    /// Set or overwrite a call-scoped field
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.add_field(key, value);
        self
    }

    /// Attach `err` under `"error"` as `{"message": <err's Display text>}`
    pub fn error_field<E: std::error::Error + ?Sized>(self, err: &E) -> Self {
        self.field(ERROR_FIELD_KEY, ErrorValue::plain(err))
    }

    /// Attach `err` under `"error"` using its own structured representation
    pub fn structured_error_field<E: StructuredError + ?Sized>(self, err: &E) -> Self {
        self.field(ERROR_FIELD_KEY, ErrorValue::structured(err))
    }

    /// Call-scoped fields accumulated so far
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        self.sink.enabled(level)
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.sink.emit(level, message, &self.fields);
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Emit at fatal level, then exit the process
    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }
}
