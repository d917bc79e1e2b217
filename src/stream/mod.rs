// src/stream/mod.rs

//! Shared streaming machinery: cipher setup, the chunk loop and its controls.

pub(crate) mod context;
pub(crate) mod control;

pub use context::TransferContext;
pub use control::StreamControl;

use crate::aliases::{Aes256Ctr, Iv16};
use crate::error::FilecryptError;
use aes::cipher::KeyIvInit;

/// Initialize AES-256-CTR from raw key bytes and an IV.
///
/// # Errors
///
/// [`FilecryptError::Crypto`] if `key` is not exactly 32 bytes.
#[inline]
pub fn init_cipher(key: &[u8], iv: &Iv16) -> Result<Aes256Ctr, FilecryptError> {
    Aes256Ctr::new_from_slices(key, iv.expose_secret())
        .map_err(|e| FilecryptError::Crypto(format!("cipher init failed: {e}")))
}
