//! A single emitted log record

use super::field::Fields;
use super::log_level::LogLevel;
use super::timestamp;
use chrono::{DateTime, FixedOffset};

/// What a writer receives: level, message, time and the merged field set
/// (permanent fields first, call-scoped fields applied on top).
#[derive(Debug, Clone)]
pub struct Record {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<FixedOffset>,
    pub fields: Fields,
}

impl Record {
    pub fn new(level: LogLevel, message: impl Into<String>, fields: Fields) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: timestamp::now(),
            fields,
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
