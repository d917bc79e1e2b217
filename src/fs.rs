//! # Filesystem Capability
//!
//! The engine touches the disk only through [`FileSystem`]. Destinations are
//! *staged*: bytes go to a [`StagedWrite`] that becomes visible at the final
//! path only on [`StagedWrite::commit`]. Dropping an uncommitted writer must
//! leave the destination path untouched.

use crate::error::FilecryptError;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A destination stream that is published only when committed.
pub trait StagedWrite: Write {
    /// Flush, sync and atomically publish the written bytes at the destination.
    fn commit(self) -> Result<(), FilecryptError>;
}

/// Source and destination access for the engine.
///
/// Failures are reported as [`FilecryptError::NotFound`] or
/// [`FilecryptError::Io`], never as sentinel values.
pub trait FileSystem: Send + Sync {
    type Reader: io::Read;
    type Writer: StagedWrite;

    fn exists(&self, path: &Path) -> bool;

    /// Length of the file at `path` in bytes.
    fn file_len(&self, path: &Path) -> Result<u64, FilecryptError>;

    fn open_for_read(&self, path: &Path) -> Result<Self::Reader, FilecryptError>;

    fn create_for_write(&self, path: &Path) -> Result<Self::Writer, FilecryptError>;
}

/// Maps `NotFound` onto the dedicated error kind; everything else stays I/O.
fn map_open_error(path: &Path, e: io::Error) -> FilecryptError {
    if e.kind() == ErrorKind::NotFound {
        FilecryptError::NotFound(path.to_path_buf())
    } else {
        FilecryptError::Io(e)
    }
}

/// `std::fs` backed implementation.
///
/// Writers are temporary files created next to the destination and renamed
/// over it on commit, so a failed or cancelled operation never leaves a
/// partial destination behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    type Reader = BufReader<File>;
    type Writer = StagedFile;

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn file_len(&self, path: &Path) -> Result<u64, FilecryptError> {
        std::fs::metadata(path)
            .map(|m| m.len())
            .map_err(|e| map_open_error(path, e))
    }

    fn open_for_read(&self, path: &Path) -> Result<Self::Reader, FilecryptError> {
        File::open(path)
            .map(BufReader::new)
            .map_err(|e| map_open_error(path, e))
    }

    fn create_for_write(&self, path: &Path) -> Result<Self::Writer, FilecryptError> {
        StagedFile::create(path)
    }
}

/// Temporary file that replaces `destination` on [`commit`](StagedWrite::commit)
/// and is deleted on drop otherwise.
pub struct StagedFile {
    inner: BufWriter<NamedTempFile>,
    destination: PathBuf,
}

impl StagedFile {
    pub fn create(destination: &Path) -> Result<Self, FilecryptError> {
        let dir = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp = tempfile::Builder::new()
            .prefix(".filecrypt-")
            .suffix(".part")
            .tempfile_in(dir)?;
        Ok(Self {
            inner: BufWriter::new(temp),
            destination: destination.to_path_buf(),
        })
    }

    /// Path of the staging file while it is still uncommitted.
    pub fn staging_path(&self) -> &Path {
        self.inner.get_ref().path()
    }
}

impl Write for StagedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl StagedWrite for StagedFile {
    fn commit(self) -> Result<(), FilecryptError> {
        let temp = self.inner.into_inner().map_err(|e| e.into_error())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.destination).map_err(|e| e.error)?;
        Ok(())
    }
}
