//! # File Encryption Engine
//!
//! [`Filecrypt`] is the high-level entry point: it validates arguments, derives
//! the key, opens both files through its [`FileSystem`], drives the stream
//! pipeline and reports through its [`Logger`].
//!
//! Everything secret lives in locals of a single call (key, IV, cipher, chunk
//! buffer) and is dropped, zeroized where applicable, on every exit path.

use crate::aliases::{Aes256Key32, PasswordString};
use crate::builders::FilecryptBuilder;
use crate::cancel::CancelFlag;
use crate::consts::{IV_LENGTH, KEY_LENGTH};
use crate::decryptor::decrypt_stream;
use crate::encryptor::encrypt_stream;
use crate::error::FilecryptError;
use crate::fs::{FileSystem, LocalFileSystem, StagedWrite};
use crate::kdf::derive_key_into;
use crate::logger::{Logger, TracingLogger};
use crate::progress::Progress;
use crate::stream::StreamControl;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    const fn verb(self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }
}

/// Password-based file encryptor with injected filesystem and logger.
///
/// # Thread Safety
///
/// Every call owns its own key, IV, streams and cancel signal, so one
/// `Filecrypt` can serve concurrent calls on *different* file pairs. The logger
/// is shared and must be thread-safe itself (enforced by the `Send + Sync`
/// bound on [`Logger`]).
///
/// # Cancellation
///
/// [`encrypt_file_with_cancel`](Self::encrypt_file_with_cancel) and
/// [`decrypt_file_with_cancel`](Self::decrypt_file_with_cancel) take a
/// [`CancelFlag`] scoped to that one call. Raising it stops only that call; the
/// engine and its other calls are unaffected.
///
/// # Example
///
/// ```no_run
/// use filecrypt_rs::{Filecrypt, PasswordString};
///
/// let engine = Filecrypt::new();
/// let password = PasswordString::new("Secret123".to_string());
///
/// engine.encrypt_file("notes.txt", "notes.txt.enc", &password)?;
/// engine.decrypt_file("notes.txt.enc", "notes.out.txt", &password)?;
/// # Ok::<(), filecrypt_rs::FilecryptError>(())
/// ```
pub struct Filecrypt<F = LocalFileSystem, L = TracingLogger> {
    pub(crate) fs: F,
    pub(crate) logger: L,
    pub(crate) chunk_size: usize,
}

impl Filecrypt {
    /// Local filesystem, `tracing` logger, default chunk size.
    #[must_use]
    pub fn new() -> Self {
        FilecryptBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> FilecryptBuilder {
        FilecryptBuilder::new()
    }
}

impl Default for Filecrypt {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, L> Filecrypt<F, L>
where
    F: FileSystem,
    L: Logger,
{
    /// Encrypt `source` into `destination` as `IV || ciphertext`.
    ///
    /// Returns the number of bytes written (plaintext length + 16). The
    /// destination appears only after the whole file was written; on any
    /// error it is left as it was.
    ///
    /// # Errors
    ///
    /// - [`FilecryptError::InvalidArgument`] for an empty path or password
    /// - [`FilecryptError::NotFound`] if `source` does not exist
    /// - [`FilecryptError::Crypto`], [`FilecryptError::Io`] from the pipeline
    pub fn encrypt_file(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
        password: &PasswordString,
    ) -> Result<u64, FilecryptError> {
        self.encrypt_file_with_cancel(source, destination, password, &CancelFlag::new())
    }

    /// [`encrypt_file`](Self::encrypt_file), stopping at the next chunk
    /// boundary once `cancel` is raised.
    ///
    /// # Errors
    ///
    /// As [`encrypt_file`](Self::encrypt_file), plus
    /// [`FilecryptError::Cancelled`]. The destination is left untouched.
    pub fn encrypt_file_with_cancel(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
        password: &PasswordString,
        cancel: &CancelFlag,
    ) -> Result<u64, FilecryptError> {
        self.process(
            Direction::Encrypt,
            source.as_ref(),
            destination.as_ref(),
            password,
            cancel,
        )
    }

    /// Decrypt a file produced by [`encrypt_file`](Self::encrypt_file).
    ///
    /// Returns the number of plaintext bytes written. A wrong password is not
    /// detected; it yields wrong plaintext.
    ///
    /// # Errors
    ///
    /// As [`encrypt_file`](Self::encrypt_file), plus [`FilecryptError::Framing`]
    /// if `source` is shorter than the 16-byte IV.
    pub fn decrypt_file(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
        password: &PasswordString,
    ) -> Result<u64, FilecryptError> {
        self.decrypt_file_with_cancel(source, destination, password, &CancelFlag::new())
    }

    /// [`decrypt_file`](Self::decrypt_file) with a per-call cancel signal.
    ///
    /// # Errors
    ///
    /// As [`decrypt_file`](Self::decrypt_file), plus
    /// [`FilecryptError::Cancelled`].
    pub fn decrypt_file_with_cancel(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
        password: &PasswordString,
        cancel: &CancelFlag,
    ) -> Result<u64, FilecryptError> {
        self.process(
            Direction::Decrypt,
            source.as_ref(),
            destination.as_ref(),
            password,
            cancel,
        )
    }

    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Run one operation and log its outcome exactly once.
    fn process(
        &self,
        direction: Direction,
        source: &Path,
        destination: &Path,
        password: &PasswordString,
        cancel: &CancelFlag,
    ) -> Result<u64, FilecryptError> {
        match self.transfer(direction, source, destination, password, cancel) {
            Ok(written) => {
                self.logger.log_info(&format!(
                    "{}ed {} -> {} ({written} bytes written)",
                    direction.verb(),
                    source.display(),
                    destination.display()
                ));
                Ok(written)
            }
            Err(e) => {
                self.logger.log_error(&format!(
                    "failed to {} {} -> {}: {e}",
                    direction.verb(),
                    source.display(),
                    destination.display()
                ));
                Err(e)
            }
        }
    }

    fn transfer(
        &self,
        direction: Direction,
        source: &Path,
        destination: &Path,
        password: &PasswordString,
        cancel: &CancelFlag,
    ) -> Result<u64, FilecryptError> {
        validate_arguments(source, destination, password)?;

        if !self.fs.exists(source) {
            return Err(FilecryptError::NotFound(source.to_path_buf()));
        }

        let mut key = Aes256Key32::new([0u8; KEY_LENGTH]);
        derive_key_into(password, key.expose_secret_mut())?;

        let source_len = self.fs.file_len(source)?;
        let total = match direction {
            Direction::Encrypt => source_len,
            Direction::Decrypt => source_len.saturating_sub(IV_LENGTH as u64),
        };
        let control = StreamControl::new(total)
            .with_chunk_size(self.chunk_size)
            .with_cancel(cancel.clone());

        let reader = self.fs.open_for_read(source)?;
        let mut writer = self.fs.create_for_write(destination)?;

        let on_progress = |progress: Progress| {
            self.logger.log_info(&format!(
                "{}ing {}: {progress}",
                direction.verb(),
                source.display()
            ));
        };

        let written = match direction {
            Direction::Encrypt => {
                encrypt_stream(reader, &mut writer, key.expose_secret(), &control, on_progress)?
            }
            Direction::Decrypt => {
                decrypt_stream(reader, &mut writer, key.expose_secret(), &control, on_progress)?
            }
        };

        writer.commit()?;
        Ok(written)
    }
}

fn validate_arguments(
    source: &Path,
    destination: &Path,
    password: &PasswordString,
) -> Result<(), FilecryptError> {
    if source.as_os_str().is_empty() {
        return Err(FilecryptError::InvalidArgument("empty source path".into()));
    }
    if destination.as_os_str().is_empty() {
        return Err(FilecryptError::InvalidArgument("empty destination path".into()));
    }
    if password.expose_secret().is_empty() {
        return Err(FilecryptError::InvalidArgument("empty password".into()));
    }
    Ok(())
}

/// Encrypt a file with the default engine (local filesystem, `tracing` logs).
pub fn encrypt_file(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    password: &PasswordString,
) -> Result<u64, FilecryptError> {
    Filecrypt::new().encrypt_file(source, destination, password)
}

/// Decrypt a file with the default engine (local filesystem, `tracing` logs).
pub fn decrypt_file(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    password: &PasswordString,
) -> Result<u64, FilecryptError> {
    Filecrypt::new().decrypt_file(source, destination, password)
}
