//! Shared in-memory output stream

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Clonable, thread-safe byte buffer usable as a writer's output.
///
/// Every clone appends to the same storage, so a buffer handed to a
/// [`LoggerOption`](crate::LoggerOption) can be inspected afterwards.
///
/// ```
/// use rtlog::{JsonWriter, Logger, LoggerOption, SharedBuffer};
///
/// let buf = SharedBuffer::new();
/// let logger = Logger::with_options([LoggerOption::writer(JsonWriter::new(buf.clone()))]);
///
/// logger.info("captured");
/// assert!(buf.contents().contains(r#""message":"captured""#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
