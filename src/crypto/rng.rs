// src/crypto/rng.rs
//! Fresh randomness for IVs, straight from the operating system.

use crate::aliases::Iv16;
use crate::consts::IV_LENGTH;
use crate::error::FilecryptError;
use rand::{rngs::OsRng, TryRngCore};

/// Fill `dest` from the OS RNG.
#[inline]
pub fn fill_random(dest: &mut [u8]) -> Result<(), FilecryptError> {
    OsRng
        .try_fill_bytes(dest)
        .map_err(|e| FilecryptError::Crypto(format!("OS RNG unavailable: {e}")))
}

/// Generate a new random IV, secure from birth.
///
/// Called once per encryption; IVs are never reused.
#[inline]
pub fn random_iv() -> Result<Iv16, FilecryptError> {
    let mut iv = Iv16::new([0u8; IV_LENGTH]);
    fill_random(iv.expose_secret_mut())?;
    Ok(iv)
}
