//! Timestamp formatting utilities
//!
//! Records are stamped with the local time and its UTC offset. The default
//! rendering carries nanosecond precision:
//! `YYYY-MM-DDTHH:MM:SS.sssssssss±HH:MM`.

use chrono::{DateTime, FixedOffset, Local};
use serde::Serialize;

/// strftime form of the default timestamp rendering
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.9f%:z";

/// Current local time with its offset
pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Timestamp rendering options
///
/// # Examples
///
/// ```
/// use rtlog::TimestampFormat;
///
/// let rendered = TimestampFormat::Nanos.format(&rtlog::core::timestamp::now());
/// // e.g. "2025-01-08T10:30:45.123456789+09:00"
/// assert_eq!(rendered.len(), 35);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum TimestampFormat {
    /// Nanosecond precision with offset: `2025-01-08T10:30:45.123456789+09:00`
    #[default]
    Nanos,

    /// RFC 3339: `2025-01-08T10:30:45.123456789+09:00`, trailing zeros trimmed
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// ```
    /// use rtlog::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<FixedOffset>) -> String {
        match self {
            TimestampFormat::Nanos => datetime.format(DEFAULT_DATETIME_FORMAT).to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Value for the `time` key of a structured record; numeric formats stay numbers.
    #[must_use]
    pub fn to_json_value(&self, datetime: &DateTime<FixedOffset>) -> serde_json::Value {
        match self {
            TimestampFormat::Unix => serde_json::Value::Number(datetime.timestamp().into()),
            TimestampFormat::UnixMillis => {
                serde_json::Value::Number(datetime.timestamp_millis().into())
            }
            _ => serde_json::Value::String(self.format(datetime)),
        }
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::Unix | TimestampFormat::UnixMillis)
    }
}
