//! # Constants
//!
//! Cipher geometry, key-derivation parameters and chunking bounds.

/// AES block size, which is also the IV length written at the front of every
/// encrypted file.
pub const IV_LENGTH: usize = 16;

/// AES-256 key length in bytes.
pub const KEY_LENGTH: usize = 32;

/// Key lengths accepted by [`derive_key`](crate::derive_key) (AES-128/192/256).
pub const SUPPORTED_KEY_LENGTHS: [usize; 3] = [16, 24, 32];

/// PBKDF2-HMAC-SHA256 iteration count.
///
/// Part of the file format contract: changing it makes every previously
/// encrypted file undecryptable.
pub const KDF_ITERATIONS: u32 = 10_000;

/// Salt mixed into every key derivation.
///
/// Constant and embedded, never stored in the file. The same password therefore
/// always yields the same key.
pub const KDF_SALT: [u8; 16] = *b"filecrypt.salt.1";

/// Default bytes read per pipeline iteration (64 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Smallest chunk size the builder will accept.
pub const MIN_CHUNK_SIZE: usize = IV_LENGTH;

/// Largest chunk size the builder will accept (8 MiB).
pub const MAX_CHUNK_SIZE: usize = 8 * 1024 * 1024;
