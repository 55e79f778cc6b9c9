//! Sequential line writer
//!
//! Wraps any byte sink with a prefix and header flags. Every call to
//! [`OutputWriter::output`] produces exactly one `write_all` on the sink.

use super::error::Result;
use super::header::format_header;
use chrono::{DateTime, Utc};
use std::fmt;
use std::io::Write;
use std::panic::Location;

pub struct OutputWriter {
    sink: Box<dyn Write + Send>,
    prefix: String,
    flags: u32,
    buf: String,
}

impl OutputWriter {
    pub fn new(sink: impl Write + Send + 'static, prefix: impl Into<String>, flags: u32) -> Self {
        Self::from_boxed(Box::new(sink), prefix, flags)
    }

    pub fn from_boxed(sink: Box<dyn Write + Send>, prefix: impl Into<String>, flags: u32) -> Self {
        Self {
            sink,
            prefix: prefix.into(),
            flags,
            buf: String::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    pub fn flags(&self) -> u32 {
        self.flags
    }

    pub fn set_flags(&mut self, flags: u32) {
        self.flags = flags;
    }

    /// Flush the current sink and replace it
    ///
    /// The replacement is installed even when the flush fails.
    pub fn set_sink(&mut self, sink: Box<dyn Write + Send>) -> Result<()> {
        let previous = std::mem::replace(&mut self.sink, sink);
        flush_boxed(previous)
    }

    /// Write one line attributed to `location`
    ///
    /// A trailing newline is added unless `text` already ends with one.
    pub fn output(&mut self, location: &Location<'_>, text: &str) -> Result<()> {
        self.output_at(Utc::now(), location, text)
    }

    /// Same as [`output`](Self::output) with an explicit clock reading
    pub fn output_at(
        &mut self,
        now: DateTime<Utc>,
        location: &Location<'_>,
        text: &str,
    ) -> Result<()> {
        self.buf.clear();
        format_header(&mut self.buf, &self.prefix, self.flags, now, location);
        self.buf.push_str(text);
        if !text.ends_with('\n') {
            self.buf.push('\n');
        }
        self.sink.write_all(self.buf.as_bytes())?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }
}

fn flush_boxed(mut sink: Box<dyn Write + Send>) -> Result<()> {
    sink.flush()?;
    Ok(())
}

impl fmt::Debug for OutputWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputWriter")
            .field("prefix", &self.prefix)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;
    use crate::core::header::flags;

    #[test]
    fn test_output_appends_newline() {
        let sink = MemoryAppender::new();
        let mut writer = OutputWriter::new(sink.clone(), "", 0);

        writer.output(Location::caller(), "first").unwrap();
        writer.output(Location::caller(), "second\n").unwrap();

        assert_eq!(sink.contents(), "first\nsecond\n");
    }

    #[test]
    fn test_output_with_prefix_and_file() {
        let sink = MemoryAppender::new();
        let mut writer = OutputWriter::new(sink.clone(), "app: ", flags::SHORT_FILE);

        let loc = Location::caller();
        writer.output(loc, "ready").unwrap();

        assert_eq!(sink.contents(), format!("app: writer.rs:{}: ready\n", loc.line()));
    }

    #[test]
    fn test_set_prefix_and_flags() {
        let sink = MemoryAppender::new();
        let mut writer = OutputWriter::new(sink.clone(), "a ", flags::STD_FLAGS);
        assert_eq!(writer.prefix(), "a ");
        assert_eq!(writer.flags(), flags::STD_FLAGS);

        writer.set_prefix("b ");
        writer.set_flags(0);
        writer.output(Location::caller(), "x").unwrap();

        assert_eq!(sink.contents(), "b x\n");
    }

    #[test]
    fn test_set_sink_redirects_output() {
        let first = MemoryAppender::new();
        let second = MemoryAppender::new();
        let mut writer = OutputWriter::new(first.clone(), "p ", 0);

        writer.output(Location::caller(), "one").unwrap();
        writer.set_sink(Box::new(second.clone())).unwrap();
        writer.output(Location::caller(), "two").unwrap();

        assert_eq!(first.contents(), "p one\n");
        assert_eq!(second.contents(), "p two\n");
        assert_eq!(writer.prefix(), "p ");
    }

    #[test]
    fn test_write_error_is_returned() {
        struct BrokenSink;

        impl Write for BrokenSink {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut writer = OutputWriter::new(BrokenSink, "", 0);
        assert!(writer.output(Location::caller(), "lost").is_err());
    }
}
