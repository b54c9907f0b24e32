//! Process-wide default logger
//!
//! The logger is built on first use from the options registered with
//! [`set_global_options`], or from `LOG_LEVEL` / `LOG_FORMAT` when none are
//! registered. [`reinitialize`] rebuilds it, which is how applications and
//! tests redirect its output after startup.
//!
//! Access is synchronized with a read-write lock. Emission only holds the
//! read lock long enough to clone the sink, so a concurrent
//! [`reinitialize`] never tears a record; records already in flight finish
//! on the logger they started on.
//!
//! # Example
//!
//! ```
//! use rtlog::{global, JsonWriter, LoggerOption, SharedBuffer};
//!
//! let buf = SharedBuffer::new();
//! global::set_global_options(vec![LoggerOption::writer(JsonWriter::new(buf.clone()))]);
//! global::reinitialize();
//!
//! global::field("job", "reindex").info("started");
//! assert!(buf.contents().contains(r#""job":"reindex""#));
//! ```

use crate::core::{
    Entry, FieldValue, Fields, LogLevel, Logger, LoggerOption, Result, StructuredError,
};
use once_cell::sync::Lazy;
use parking_lot::RwLock;

static GLOBAL_OPTIONS: Lazy<RwLock<Vec<LoggerOption>>> = Lazy::new(|| RwLock::new(Vec::new()));

static GLOBAL: Lazy<RwLock<Logger>> = Lazy::new(|| RwLock::new(build()));

fn build() -> Logger {
    let options = GLOBAL_OPTIONS.read();
    if options.is_empty() {
        Logger::new()
    } else {
        Logger::with_options(options.iter())
    }
}

/// Options used the next time the process-wide logger is built
pub fn set_global_options(options: Vec<LoggerOption>) {
    *GLOBAL_OPTIONS.write() = options;
}

pub fn global_options() -> Vec<LoggerOption> {
    GLOBAL_OPTIONS.read().clone()
}

/// Rebuild the process-wide logger, dropping its permanent fields
pub fn reinitialize() {
    let logger = build();
    *GLOBAL.write() = logger;
}

/// Clone of the current process-wide logger
pub fn logger() -> Logger {
    GLOBAL.read().clone()
}

pub fn entry() -> Entry {
    GLOBAL.read().entry()
}

pub fn field<K, V>(key: K, value: V) -> Entry
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    entry().field(key, value)
}

pub fn error_field<E: std::error::Error + ?Sized>(err: &E) -> Entry {
    entry().error_field(err)
}

pub fn structured_error_field<E: StructuredError + ?Sized>(err: &E) -> Entry {
    entry().structured_error_field(err)
}

pub fn set_permanent<K, V>(key: K, value: V)
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    set_permanent_with(|fields| fields.with_field(key, value));
}

/// Replace the permanent fields of the process-wide logger.
///
/// `f` runs with no lock held, so it may log or read [`with`]. Two mutators
/// running at the same time race: the one installed last wins.
pub fn set_permanent_with<F>(f: F)
where
    F: FnOnce(Fields) -> Fields,
{
    let fields = f(with());
    GLOBAL.write().set_permanent_with(|_| fields);
}

pub fn with() -> Fields {
    GLOBAL.read().with()
}

pub fn log(level: LogLevel, message: impl Into<String>) {
    entry().log(level, message);
}

pub fn trace(message: impl Into<String>) {
    entry().trace(message);
}

pub fn debug(message: impl Into<String>) {
    entry().debug(message);
}

pub fn info(message: impl Into<String>) {
    entry().info(message);
}

pub fn warn(message: impl Into<String>) {
    entry().warn(message);
}

pub fn error(message: impl Into<String>) {
    entry().error(message);
}

/// Emit at fatal level, then exit the process
pub fn fatal(message: impl Into<String>) {
    entry().fatal(message);
}

pub fn flush() -> Result<()> {
    GLOBAL.read().flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writers::{JsonWriter, SharedBuffer};
    use serial_test::serial;

    fn redirect(level: &str) -> SharedBuffer {
        let buf = SharedBuffer::new();
        set_global_options(vec![
            LoggerOption::level(level),
            LoggerOption::writer(JsonWriter::new(buf.clone())),
        ]);
        reinitialize();
        buf
    }

    #[test]
    #[serial]
    fn test_forwarding_respects_level() {
        let buf = redirect("warn");

        trace("TRACE-MARK");
        debug("DEBUG-MARK");
        info("INFO-MARK");
        warn("WARN-MARK");
        error("ERROR-MARK");

        let out = buf.contents();
        assert!(!out.contains("TRACE-MARK"));
        assert!(!out.contains("DEBUG-MARK"));
        assert!(!out.contains("INFO-MARK"));
        assert!(out.contains("WARN-MARK"));
        assert!(out.contains("ERROR-MARK"));
    }

    #[test]
    #[serial]
    fn test_permanent_fields_reach_entries() {
        let buf = redirect("info");

        set_permanent("set1", "a");
        set_permanent_with(|fields| fields.with_field("set2", "b"));
        field("with1", "1").info("test msg1");

        let out = buf.contents();
        assert!(out.contains(r#""set1":"a""#));
        assert!(out.contains(r#""set2":"b""#));
        assert!(out.contains(r#""with1":"1""#));
        assert_eq!(with().len(), 2);
    }

    #[test]
    #[serial]
    fn test_mutator_may_use_global_logger() {
        let buf = redirect("info");
        let (done_tx, done_rx) = std::sync::mpsc::channel();

        std::thread::spawn(move || {
            set_permanent_with(|fields| {
                info("inside mutator");
                let seen = with().len();
                fields.with_field("seen", seen)
            });
            let _ = done_tx.send(());
        });

        done_rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .expect("set_permanent_with should return");
        info("after mutator");

        let lines = buf.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("inside mutator"));
        assert!(lines[1].contains(r#""seen":0"#));
    }

    #[test]
    #[serial]
    fn test_reinitialize_drops_permanent_fields() {
        let _ = redirect("info");
        set_permanent("stale", true);

        let buf = redirect("info");
        info("fresh");

        assert!(with().is_empty());
        assert!(!buf.contents().contains("stale"));
    }

    #[test]
    #[serial]
    fn test_error_field() {
        let buf = redirect("info");
        let err = std::io::Error::new(std::io::ErrorKind::Other, "test error");

        error_field(&err).error("failed");

        assert!(buf
            .contents()
            .contains(r#""error":{"message":"test error"}"#));
    }

    #[test]
    #[serial]
    fn test_logger_snapshot_is_independent() {
        let buf = redirect("info");
        let mut local = logger();
        local.set_permanent("local_only", 1);

        info("from global");

        assert!(!buf.contents().contains("local_only"));
        assert_eq!(global_options().len(), 2);
    }
}
