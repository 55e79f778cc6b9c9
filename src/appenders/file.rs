//! File appender implementation

use crate::core::Result;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-only buffered file sink
pub struct FileAppender {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for FileAppender {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_appender_appends() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_file = temp_dir.path().join("app.log");

        {
            let mut appender = FileAppender::new(&log_file).expect("Failed to create appender");
            appender.write_all(b"one\n").unwrap();
        }
        {
            let mut appender = FileAppender::new(&log_file).expect("Failed to reopen appender");
            assert_eq!(appender.path(), log_file.as_path());
            appender.write_all(b"two\n").unwrap();
        }

        let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
        assert_eq!(content, "one\ntwo\n");
    }

    #[test]
    fn test_file_appender_missing_dir() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_file = temp_dir.path().join("missing").join("app.log");
        assert!(FileAppender::new(log_file).is_err());
    }
}
