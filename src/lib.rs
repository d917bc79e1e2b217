// src/lib.rs

//! Streaming password-based file encryption.
//!
//! Files are encrypted with AES-256-CTR under a key derived from the password
//! with PBKDF2-HMAC-SHA256, and stored as `IV (16 bytes) || ciphertext`.
//! Input of any size is processed in fixed-size chunks with constant memory.
//!
//! The format carries no integrity tag: a wrong password or a tampered file
//! decrypts to garbage without an error.

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod cancel;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod engine;
pub mod error;
pub mod fs;
pub mod kdf;
pub mod logger;
pub mod progress;
pub mod stream;

// High-level API
pub use engine::{decrypt_file, encrypt_file, Filecrypt};
pub use error::FilecryptError;

pub use aliases::PasswordString;
pub use builders::FilecryptBuilder;
pub use cancel::CancelFlag;
pub use fs::{FileSystem, LocalFileSystem, StagedWrite};
pub use logger::{Logger, NullLogger, TracingLogger};
pub use progress::Progress;

// Stream-level building blocks for callers with their own I/O
pub use decryptor::decrypt_stream;
pub use encryptor::encrypt_stream;
pub use kdf::{derive_key, derive_key_into};
pub use stream::StreamControl;

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};
