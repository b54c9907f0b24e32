//! Option pipeline used to configure a logger before construction
//!
//! A logger is built by starting from [`LoggerOptions::default`] and applying
//! each [`LoggerOption`] in order. Later options overwrite earlier ones for
//! the same setting.

use super::{
    log_level::LogLevel, output_format::OutputFormat, sink::Sink, timestamp::TimestampFormat,
    writer::RecordWriter,
};
use crate::writers::{ConsoleWriter, JsonWriter};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Mutable configuration handed to each option
pub struct LoggerOptions {
    pub level: LogLevel,
    pub writer: Box<dyn RecordWriter>,
    pub timestamp_format: TimestampFormat,
}

impl Default for LoggerOptions {
    /// `info` level, JSON to standard output, nanosecond timestamps
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            writer: Box::new(JsonWriter::stdout()),
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl LoggerOptions {
    /// Defaults with every option applied in order
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<LoggerOption>,
    {
        let mut opts = Self::default();
        for option in options {
            option.borrow().apply(&mut opts);
        }
        opts
    }

    pub fn into_sink(self) -> Sink {
        Sink::new(self.level, self.writer, self.timestamp_format)
    }
}

impl fmt::Debug for LoggerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerOptions")
            .field("level", &self.level)
            .field("writer", &self.writer.name())
            .field("timestamp_format", &self.timestamp_format)
            .finish()
    }
}

/// One configuration step.
///
/// Options are reusable: the process-wide logger and the context carrier
/// apply the same list every time they build a logger.
///
/// # Example
///
/// ```
/// use rtlog::{LogLevel, LoggerOption, LoggerOptions};
///
/// let opts = LoggerOptions::from_options([
///     LoggerOption::level("debug"),
///     LoggerOption::format("console"),
///     LoggerOption::new(|opt| opt.level = LogLevel::Warn),
/// ]);
/// assert_eq!(opts.level, LogLevel::Warn);
/// ```
#[derive(Clone)]
pub struct LoggerOption(Arc<dyn Fn(&mut LoggerOptions) + Send + Sync>);

impl LoggerOption {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut LoggerOptions) + Send + Sync + 'static,
    {
        LoggerOption(Arc::new(f))
    }

    pub fn apply(&self, opts: &mut LoggerOptions) {
        (self.0)(opts)
    }

    /// Set the minimum level from a case-insensitive name.
    ///
    /// An unrecognized name leaves the level unchanged.
    pub fn level(name: impl AsRef<str>) -> Self {
        match name.as_ref().parse::<LogLevel>() {
            Ok(level) => Self::min_level(level),
            Err(_) => Self::new(|_| {}),
        }
    }

    pub fn min_level(level: LogLevel) -> Self {
        Self::new(move |opt| opt.level = level)
    }

    /// Pick the writer by format name: `console` or `json`.
    ///
    /// An unrecognized name leaves the writer unchanged.
    pub fn format(name: impl AsRef<str>) -> Self {
        match name.as_ref().parse::<OutputFormat>() {
            Ok(OutputFormat::Console) => Self::console_writer(),
            Ok(OutputFormat::Json) => Self::json_writer(),
            Err(_) => Self::new(|_| {}),
        }
    }

    /// Human-readable writer to standard output
    pub fn console_writer() -> Self {
        Self::new(|opt| opt.writer = Box::new(ConsoleWriter::stdout()))
    }

    /// JSON writer to standard output
    pub fn json_writer() -> Self {
        Self::new(|opt| opt.writer = Box::new(JsonWriter::stdout()))
    }

    /// Install a clone of `writer` each time the option is applied
    pub fn writer<W>(writer: W) -> Self
    where
        W: RecordWriter + Clone + Sync + 'static,
    {
        Self::new(move |opt| opt.writer = Box::new(writer.clone()))
    }

    pub fn timestamp_format(format: TimestampFormat) -> Self {
        Self::new(move |opt| opt.timestamp_format = format.clone())
    }
}

impl fmt::Debug for LoggerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LoggerOption(..)")
    }
}
