//! Output format configuration for records
//!
//! Provides the two renderings a logger can be configured with:
//! - Json: one machine-readable object per line (default)
//! - Console: human-readable line with `{name:value}` framed fields
//!
//! A JSON record always carries its own `level`, `time` and `message`.
//! Caller fields with one of those names are written as `fields.level`,
//! `fields.time` and `fields.message` instead.

use super::error::LoggerError;
use super::record::Record;
use super::timestamp::TimestampFormat;
use std::borrow::Cow;
use std::str::FromStr;

/// Keys a structured record owns; caller fields never replace them.
pub const RESERVED_KEYS: [&str; 3] = ["level", "time", "message"];

/// Prefix applied to a caller field whose key is in [`RESERVED_KEYS`]
pub const RESERVED_KEY_PREFIX: &str = "fields.";

/// Output format for records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format for machine processing
    ///
    /// Example: `{"level":"info","time":"2025-01-08T10:30:45.123456789+09:00","env":"prod","message":"hi"}`
    #[default]
    Json,

    /// Human-readable format
    ///
    /// Example: `2025-01-08T10:30:45.123456789+09:00 info  hi  {env:prod}`
    Console,
}

impl OutputFormat {
    pub fn to_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Console => "console",
        }
    }

    /// Render a record according to this output format, without a trailing newline
    pub fn format(&self, record: &Record, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Json => Self::format_json(record, timestamp_format),
            OutputFormat::Console => {
                let level = format!("{:<5}", record.level);
                Self::format_console(record, timestamp_format, &level)
            }
        }
    }

    fn format_json(record: &Record, timestamp_format: &TimestampFormat) -> String {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(record.level.to_str().to_string()),
        );
        json_obj.insert(
            "time".to_string(),
            timestamp_format.to_json_value(&record.timestamp),
        );

        for (key, value) in record.fields.iter() {
            json_obj.insert(Self::json_key(key).into_owned(), value.to_json_value());
        }

        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(record.message.clone()),
        );

        serde_json::Value::Object(json_obj).to_string()
    }

    /// `level` becomes `fields.level`; other keys pass through
    fn json_key(key: &str) -> Cow<'_, str> {
        if RESERVED_KEYS.contains(&key) {
            Cow::Owned(format!("{}{}", RESERVED_KEY_PREFIX, key))
        } else {
            Cow::Borrowed(key)
        }
    }

    /// Console line with a caller-rendered level (plain or colored).
    ///
    /// The level column is padded to five characters before rendering so
    /// ANSI escapes do not count toward the width.
    pub(crate) fn format_console(
        record: &Record,
        timestamp_format: &TimestampFormat,
        level: &str,
    ) -> String {
        let mut line = format!(
            "{} {} {}",
            timestamp_format.format(&record.timestamp),
            level,
            Self::sanitize_message(&record.message)
        );

        if !record.fields.is_empty() {
            let framed: Vec<String> = record
                .fields
                .iter()
                .map(|(key, value)| {
                    format!("{{{}:{}}}", key, Self::sanitize_message(&value.to_string()))
                })
                .collect();
            line.push_str("  ");
            line.push_str(&framed.join(" "));
        }

        line
    }

    /// Escape line breaks and tabs so one record stays on one line
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }
}

impl FromStr for OutputFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "console" => Ok(OutputFormat::Console),
            _ => Err(LoggerError::invalid_format(s)),
        }
    }
}
