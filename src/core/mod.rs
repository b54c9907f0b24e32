//! Core logger types and traits

pub mod config;
pub mod entry;
pub mod error;
pub mod error_field;
pub mod field;
pub mod log_level;
pub mod logger;
pub mod options;
pub mod output_format;
pub mod record;
pub mod sink;
pub mod timestamp;
pub mod writer;

pub use config::EnvConfig;
pub use entry::Entry;
pub use error::{LoggerError, Result};
pub use error_field::{ErrorValue, StructuredError, ERROR_FIELD_KEY};
pub use field::{FieldValue, Fields};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use options::{LoggerOption, LoggerOptions};
pub use output_format::{OutputFormat, RESERVED_KEYS, RESERVED_KEY_PREFIX};
pub use record::Record;
pub use sink::Sink;
pub use timestamp::{TimestampFormat, DEFAULT_DATETIME_FORMAT};
pub use writer::RecordWriter;
