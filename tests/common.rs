//! tests/common.rs
//! Shared constants, loggers and filesystem doubles for the integration tests

#![allow(dead_code)] // each test binary uses a different subset

use filecrypt_rs::fs::StagedFile;
use filecrypt_rs::{CancelFlag, FileSystem, FilecryptError, LocalFileSystem, Logger, StagedWrite};
use std::io::{self, Read, Write};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Password used by the concrete scenarios
pub const TEST_PASSWORD: &str = "Secret123";

pub const HELLO: &[u8] = b"Hello, World!";

/// AES block size / IV length
pub const N: usize = 16;

/// Deterministic, non-repeating-looking test payload.
pub fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(31) ^ (i >> 7)) as u8).collect()
}

// —————————————————————————————————————————————————————————————————————————————
// Loggers
// —————————————————————————————————————————————————————————————————————————————

/// Keeps every message; optionally raises a cancel flag on the first progress line.
#[derive(Default)]
pub struct RecordingLogger {
    infos: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
    cancel_on_progress: Option<CancelFlag>,
}

impl RecordingLogger {
    pub fn cancelling(flag: CancelFlag) -> Self {
        Self {
            cancel_on_progress: Some(flag),
            ..Self::default()
        }
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    /// Info lines emitted by the chunk loop (everything but the final summary).
    pub fn progress_lines(&self) -> Vec<String> {
        self.infos()
            .into_iter()
            .filter(|m| m.contains("% ("))
            .collect()
    }
}

impl Logger for RecordingLogger {
    fn log_info(&self, message: &str) {
        if let Some(flag) = &self.cancel_on_progress {
            flag.cancel();
        }
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn log_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

// —————————————————————————————————————————————————————————————————————————————
// Filesystems
// —————————————————————————————————————————————————————————————————————————————

/// Local filesystem that counts every call made through it.
#[derive(Default)]
pub struct CountingFs {
    calls: AtomicUsize,
}

impl CountingFs {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl FileSystem for CountingFs {
    type Reader = <LocalFileSystem as FileSystem>::Reader;
    type Writer = StagedFile;

    fn exists(&self, path: &Path) -> bool {
        self.hit();
        LocalFileSystem.exists(path)
    }

    fn file_len(&self, path: &Path) -> Result<u64, FilecryptError> {
        self.hit();
        LocalFileSystem.file_len(path)
    }

    fn open_for_read(&self, path: &Path) -> Result<Self::Reader, FilecryptError> {
        self.hit();
        LocalFileSystem.open_for_read(path)
    }

    fn create_for_write(&self, path: &Path) -> Result<Self::Writer, FilecryptError> {
        self.hit();
        LocalFileSystem.create_for_write(path)
    }
}

/// Reads from disk; every writer fails once `limit` bytes have been accepted.
pub struct FailingWriteFs {
    pub limit: usize,
}

pub struct FailingWriter {
    written: usize,
    limit: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written + buf.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        self.written += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl StagedWrite for FailingWriter {
    fn commit(self) -> Result<(), FilecryptError> {
        Ok(())
    }
}

impl FileSystem for FailingWriteFs {
    type Reader = <LocalFileSystem as FileSystem>::Reader;
    type Writer = FailingWriter;

    fn exists(&self, path: &Path) -> bool {
        LocalFileSystem.exists(path)
    }

    fn file_len(&self, path: &Path) -> Result<u64, FilecryptError> {
        LocalFileSystem.file_len(path)
    }

    fn open_for_read(&self, path: &Path) -> Result<Self::Reader, FilecryptError> {
        LocalFileSystem.open_for_read(path)
    }

    fn create_for_write(&self, _path: &Path) -> Result<Self::Writer, FilecryptError> {
        Ok(FailingWriter {
            written: 0,
            limit: self.limit,
        })
    }
}

/// Writes through [`LocalFileSystem`]; every reader fails once `good` bytes
/// have been handed out.
pub struct FailingReadFs {
    pub good: usize,
}

pub struct FailingReader {
    inner: <LocalFileSystem as FileSystem>::Reader,
    remaining: usize,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::Other, "bad sector"));
        }
        let want = buf.len().min(self.remaining);
        let n = self.inner.read(&mut buf[..want])?;
        self.remaining -= n;
        Ok(n)
    }
}

impl FileSystem for FailingReadFs {
    type Reader = FailingReader;
    type Writer = StagedFile;

    fn exists(&self, path: &Path) -> bool {
        LocalFileSystem.exists(path)
    }

    fn file_len(&self, path: &Path) -> Result<u64, FilecryptError> {
        LocalFileSystem.file_len(path)
    }

    fn open_for_read(&self, path: &Path) -> Result<Self::Reader, FilecryptError> {
        Ok(FailingReader {
            inner: LocalFileSystem.open_for_read(path)?,
            remaining: self.good,
        })
    }

    fn create_for_write(&self, path: &Path) -> Result<Self::Writer, FilecryptError> {
        LocalFileSystem.create_for_write(path)
    }
}
