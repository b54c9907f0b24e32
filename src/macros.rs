//! Logging macros for ergonomic log message formatting.
//!
//! The macros accept anything with a `log(level, message)` method, so they
//! work on a [`Logger`](crate::Logger) as well as on an
//! [`Entry`](crate::Entry) that already carries fields.
//!
//! # Examples
//!
//! ```
//! use rtlog::prelude::*;
//! use rtlog::info;
//!
//! let buf = SharedBuffer::new();
//! let logger = Logger::builder().writer(JsonWriter::new(buf.clone())).build();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! info!(logger.field("tls", true), "Handshake ok");
//!
//! assert_eq!(buf.lines().len(), 2);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rtlog::prelude::*;
/// # let logger = Logger::builder().writer(JsonWriter::new(SharedBuffer::new())).build();
/// use rtlog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rtlog::prelude::*;
/// # let logger = Logger::builder().writer(JsonWriter::new(SharedBuffer::new())).build();
/// use rtlog::error;
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// error!(logger.error_field(&err), "Write failed after {} retries", 3);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message and exit the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
