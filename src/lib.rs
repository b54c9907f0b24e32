//! # rtlog
//!
//! A small structured-logging layer: JSON or console records with permanent
//! fields, per-call field builders, error normalization and a process-wide
//! default logger configured from the environment.
//!
//! ## Features
//!
//! - **Permanent fields**: attached to every record, copy-on-write per logger
//! - **Entries**: per-call fields, errors normalized under `"error"`
//! - **Options**: reusable configuration steps, also read from `LOG_LEVEL` / `LOG_FORMAT`
//! - **Process-wide logger**: lazily built, replaceable at runtime
//! - **Context carrier**: logger options travel inside request extensions
//!
//! ## Example
//!
//! ```
//! use rtlog::prelude::*;
//!
//! let buf = SharedBuffer::new();
//! let mut logger = Logger::with_options([
//!     LoggerOption::level("info"),
//!     LoggerOption::writer(JsonWriter::new(buf.clone())),
//! ]);
//!
//! logger.set_permanent("set1", "a");
//! logger.field("with1", "1").info("test msg1");
//!
//! let line = buf.lines().remove(0);
//! assert!(line.contains(r#""set1":"a""#));
//! assert!(line.contains(r#""with1":"1""#));
//! assert!(line.contains(r#""message":"test msg1""#));
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod optctx;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        Entry, EnvConfig, ErrorValue, FieldValue, Fields, LogLevel, Logger, LoggerBuilder,
        LoggerError, LoggerOption, LoggerOptions, OutputFormat, RecordWriter, Result,
        StructuredError, TimestampFormat,
    };
    pub use crate::optctx::{LoggerContextExt, OptCtx};
    pub use crate::writers::{ConsoleWriter, JsonWriter, SharedBuffer};
}

pub use crate::core::{
    Entry, EnvConfig, ErrorValue, FieldValue, Fields, LogLevel, Logger, LoggerBuilder,
    LoggerError, LoggerOption, LoggerOptions, OutputFormat, Record, RecordWriter, Result, Sink,
    StructuredError, TimestampFormat, DEFAULT_DATETIME_FORMAT, ERROR_FIELD_KEY, RESERVED_KEYS,
    RESERVED_KEY_PREFIX,
};
pub use crate::optctx::{LoggerContextExt, OptCtx};
pub use crate::writers::{ConsoleWriter, JsonWriter, SharedBuffer};
