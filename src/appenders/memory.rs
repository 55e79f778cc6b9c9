//! In-memory sink whose contents stay readable after it is handed to a logger

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared in-memory buffer
///
/// Clones share the same storage, so keep one clone and give the other to
/// the logger.
///
/// ```
/// use leveled_logger::{Logger, MemoryAppender};
///
/// let sink = MemoryAppender::new();
/// let logger = Logger::new(sink.clone(), "", 0);
/// logger.info("hello");
/// assert_eq!(sink.contents(), "hello\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    buffer: Arc<Mutex<Vec<u8>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    /// Number of `write` calls received
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Drain the buffer, returning its contents
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.buffer.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemoryAppender {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_storage() {
        let sink = MemoryAppender::new();
        let mut writer = sink.clone();
        writer.write_all(b"a\nb\n").unwrap();

        assert_eq!(sink.contents(), "a\nb\n");
        assert_eq!(sink.lines(), vec!["a", "b"]);
        assert_eq!(sink.write_count(), 1);
    }

    #[test]
    fn test_take_and_clear() {
        let sink = MemoryAppender::new();
        sink.clone().write_all(b"first").unwrap();

        assert_eq!(sink.take(), "first");
        assert!(sink.is_empty());

        sink.clone().write_all(b"second").unwrap();
        sink.clear();
        assert!(sink.is_empty());
    }
}
