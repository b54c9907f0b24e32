//! Console writer implementation

use crate::core::{LoggerError, OutputFormat, Record, RecordWriter, Result, TimestampFormat};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::{self, Write};

/// Human-readable writer: `<time> <level>  <message>  {name:value} ...`
///
/// The level is padded to five columns, field names are framed as `{name:`
/// and values as `value}`, and the message is passed through unformatted.
#[derive(Debug, Clone)]
pub struct ConsoleWriter<W> {
    out: W,
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
}

impl<W: Write + Send> ConsoleWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            use_colors: false,
        }
    }

    /// Color the level column with ANSI escapes (requires the `console` feature)
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn format_line(&self, record: &Record, timestamp_format: &TimestampFormat) -> String {
        #[cfg(feature = "console")]
        if self.use_colors {
            let level = format!("{:<5}", record.level)
                .color(record.level.color_code())
                .to_string();
            return OutputFormat::format_console(record, timestamp_format, &level);
        }

        OutputFormat::Console.format(record, timestamp_format)
    }
}

impl ConsoleWriter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> RecordWriter for ConsoleWriter<W> {
    fn write(&mut self, record: &Record, timestamp_format: &TimestampFormat) -> Result<()> {
        let mut line = self.format_line(record, timestamp_format);
        line.push('\n');
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
        "console"
    }
}
