//! # Error Types
//!
//! All operations return [`Result<T, FilecryptError>`](FilecryptError).

use std::path::PathBuf;
use thiserror::Error;

/// The error type for all encryption and decryption operations.
#[derive(Error, Debug)]
pub enum FilecryptError {
    /// Empty path or password, rejected before any I/O.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The source file does not exist.
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The encrypted input is too short to contain the IV.
    #[error("Framing error: {0}")]
    Framing(String),

    /// Cipher or KDF failure, e.g. a key of unsupported length.
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Read or write failure against the source or destination.
    ///
    /// Wraps [`std::io::Error`]; created automatically by `?` on I/O calls.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The operation observed its [`CancelFlag`](crate::CancelFlag) between chunks.
    #[error("Operation cancelled")]
    Cancelled,
}
