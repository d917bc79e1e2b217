//! src/builders/filecrypt_builder.rs
//! Engine configuration builder

use crate::consts::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE, MIN_CHUNK_SIZE};
use crate::engine::Filecrypt;
use crate::fs::{FileSystem, LocalFileSystem};
use crate::logger::{Logger, TracingLogger};

/// Builder for [`Filecrypt`].
///
/// Defaults: [`LocalFileSystem`], [`TracingLogger`] and [`DEFAULT_CHUNK_SIZE`].
/// Cancellation is per call, not part of the engine; see
/// [`Filecrypt::encrypt_file_with_cancel`].
///
/// KDF salt and iteration count are part of the file format and are not
/// configurable here.
#[derive(Debug, Clone)]
pub struct FilecryptBuilder<F = LocalFileSystem, L = TracingLogger> {
    fs: F,
    logger: L,
    chunk_size: usize,
}

impl FilecryptBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fs: LocalFileSystem,
            logger: TracingLogger,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl Default for FilecryptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, L> FilecryptBuilder<F, L>
where
    F: FileSystem,
    L: Logger,
{
    /// Swap the filesystem collaborator.
    #[must_use]
    pub fn with_filesystem<F2: FileSystem>(self, fs: F2) -> FilecryptBuilder<F2, L> {
        FilecryptBuilder {
            fs,
            logger: self.logger,
            chunk_size: self.chunk_size,
        }
    }

    /// Swap the logger collaborator.
    #[must_use]
    pub fn with_logger<L2: Logger>(self, logger: L2) -> FilecryptBuilder<F, L2> {
        FilecryptBuilder {
            fs: self.fs,
            logger,
            chunk_size: self.chunk_size,
        }
    }

    /// Bytes per pipeline iteration, clamped to `MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE`.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.clamp(MIN_CHUNK_SIZE, MAX_CHUNK_SIZE);
        self
    }

    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    #[must_use]
    pub fn build(self) -> Filecrypt<F, L> {
        Filecrypt {
            fs: self.fs,
            logger: self.logger,
            chunk_size: self.chunk_size,
        }
    }
}
