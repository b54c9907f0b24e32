//! Main logger implementation

use super::{
    config::EnvConfig,
    entry::Entry,
    error::Result,
    error_field::StructuredError,
    field::{FieldValue, Fields},
    log_level::LogLevel,
    options::{LoggerOption, LoggerOptions},
    sink::Sink,
    timestamp::TimestampFormat,
    writer::RecordWriter,
};
use std::borrow::Borrow;

/// A configured sink plus the permanent fields attached to every record.
///
/// Cloning a logger is cheap and the clone shares the output stream.
/// Permanent fields are copy-on-write: [`Logger::set_permanent`] only
/// affects this value and the entries created from it afterwards.
///
/// # Example
///
/// ```
/// use rtlog::{Logger, LoggerOption, JsonWriter, SharedBuffer};
///
/// let buf = SharedBuffer::new();
/// let mut logger = Logger::with_options([
///     LoggerOption::level("debug"),
///     LoggerOption::writer(JsonWriter::new(buf.clone())),
/// ]);
///
/// logger.set_permanent("service", "billing");
/// logger.field("invoice", 42).debug("issued");
///
/// let out = buf.contents();
/// assert!(out.contains(r#""service":"billing""#));
/// assert!(out.contains(r#""invoice":42"#));
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    sink: Sink,
}

impl Logger {
    /// Logger configured from `LOG_LEVEL` / `LOG_FORMAT`
    #[must_use]
    pub fn new() -> Self {
        Self::from_env_config(EnvConfig::process())
    }

    /// Logger built from the defaults with `options` applied in order
    #[must_use]
    pub fn with_options<I>(options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<LoggerOption>,
    {
        Self::from_sink(LoggerOptions::from_options(options).into_sink())
    }

    #[must_use]
    pub fn from_env_config(config: &EnvConfig) -> Self {
        Self::with_options(config.options())
    }

    pub fn from_sink(sink: Sink) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    pub fn min_level(&self) -> LogLevel {
        self.sink.min_level()
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        self.sink.enabled(level)
    }

    /// New entry with no call-scoped fields
    pub fn entry(&self) -> Entry {
        Entry::new(self.sink.clone())
    }

    pub fn field<K, V>(&self, key: K, value: V) -> Entry
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.entry().field(key, value)
    }

    pub fn error_field<E: std::error::Error + ?Sized>(&self, err: &E) -> Entry {
        self.entry().error_field(err)
    }

    pub fn structured_error_field<E: StructuredError + ?Sized>(&self, err: &E) -> Entry {
        self.entry().structured_error_field(err)
    }

    /// Attach `key`/`value` to every record emitted from now on
    pub fn set_permanent<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.set_permanent_with(|fields| fields.with_field(key, value));
    }

    /// Replace the permanent fields with whatever `f` returns.
    ///
    /// `f` receives the current set, so it can add, overwrite or remove
    /// several fields at once.
    pub fn set_permanent_with<F>(&mut self, f: F)
    where
        F: FnOnce(Fields) -> Fields,
    {
        let fields = f(self.with());
        self.sink = self.sink.with_fields(fields);
    }

    /// Copy of the current permanent fields
    pub fn with(&self) -> Fields {
        self.sink.fields().clone()
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.sink.emit(level, message, &Fields::new());
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

    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rtlog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .level(LogLevel::Debug)
    ///     .format("console")
    ///     .build();
    /// assert_eq!(logger.min_level(), LogLevel::Debug);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Collects [`LoggerOption`]s; `build` applies them over the defaults.
#[derive(Debug, Clone, Default)]
pub struct LoggerBuilder {
    options: Vec<LoggerOption>,
}

impl LoggerBuilder {
    /// Create a new builder starting from the compiled-in defaults
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Create a builder seeded with the `LOG_LEVEL` / `LOG_FORMAT` settings
    pub fn from_env() -> Self {
        Self {
            options: EnvConfig::process().options(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(self, level: LogLevel) -> Self {
        self.option(LoggerOption::min_level(level))
    }

    #[must_use = "builder methods return a new value"]
    pub fn format(self, name: impl AsRef<str>) -> Self {
        self.option(LoggerOption::format(name))
    }

    #[must_use = "builder methods return a new value"]
    pub fn writer<W>(self, writer: W) -> Self
    where
        W: RecordWriter + Clone + Sync + 'static,
    {
        self.option(LoggerOption::writer(writer))
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(self, format: TimestampFormat) -> Self {
        self.option(LoggerOption::timestamp_format(format))
    }

    #[must_use = "builder methods return a new value"]
    pub fn option(mut self, option: LoggerOption) -> Self {
        self.options.push(option);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn options<I: IntoIterator<Item = LoggerOption>>(mut self, options: I) -> Self {
        self.options.extend(options);
        self
    }

    pub fn build(self) -> Logger {
        Logger::with_options(self.options)
    }
}
