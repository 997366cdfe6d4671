#![deny(unsafe_code)]

//! Shared test utilities for the clkmgr diagnostics workspace.
//!
//! [`CaptureBuffer`] is a cloneable in-memory writer: hand one clone to a
//! `Logger` (directly or behind an `Arc`) and read what was written through
//! another. [`ScratchDir`] creates input files in a temporary directory that is
//! removed on drop.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tempfile::TempDir;

/// Cloneable writer whose clones share one byte buffer.
#[derive(Clone, Debug, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything written so far.
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns everything written so far as UTF-8 text.
    ///
    /// # Panics
    ///
    /// Panics if the captured bytes are not valid UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8(self.contents()).expect("captured output is UTF-8")
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Temporary directory for test input files.
#[derive(Debug)]
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    /// Creates a new empty scratch directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Root of the scratch directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `contents` to `name` inside the directory and returns its path.
    pub fn write_file(&self, name: &str, contents: &[u8]) -> io::Result<PathBuf> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_buffer() {
        let capture = CaptureBuffer::new();
        let mut writer = capture.clone();
        writer.write_all(b"shared").expect("write");
        assert_eq!(capture.text(), "shared");
    }

    #[test]
    fn scratch_dir_writes_and_cleans_up() {
        let path;
        {
            let scratch = ScratchDir::new().expect("scratch dir");
            path = scratch.write_file("frame.bin", &[1, 2, 3]).expect("write");
            assert_eq!(std::fs::read(&path).expect("read"), vec![1, 2, 3]);
        }
        assert!(!path.exists());
    }
}
