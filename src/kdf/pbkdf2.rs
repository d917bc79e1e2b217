//! src/kdf/pbkdf2.rs

use crate::aliases::{DerivedKey, PasswordString};
use crate::consts::{KDF_ITERATIONS, KDF_SALT, SUPPORTED_KEY_LENGTHS};
use crate::error::FilecryptError;

use hmac::Hmac;
use ::pbkdf2::pbkdf2;
use sha2::Sha256;

/// Derive PBKDF2-HMAC-SHA256 directly into a caller-owned buffer.
///
/// The output length is `out_key.len()` and must be one of
/// [`SUPPORTED_KEY_LENGTHS`]. Salt and iteration count are the embedded
/// [`KDF_SALT`] / [`KDF_ITERATIONS`], so the result depends only on the
/// password and the requested length.
#[inline(always)]
pub fn derive_key_into(password: &PasswordString, out_key: &mut [u8]) -> Result<(), FilecryptError> {
    if password.expose_secret().is_empty() {
        return Err(FilecryptError::InvalidArgument("empty password".into()));
    }
    if !SUPPORTED_KEY_LENGTHS.contains(&out_key.len()) {
        return Err(FilecryptError::Crypto(format!(
            "unsupported key length: {} bytes",
            out_key.len()
        )));
    }

    pbkdf2::<Hmac<Sha256>>(
        password.expose_secret().as_bytes(),
        &KDF_SALT,
        KDF_ITERATIONS,
        out_key,
    )
    .map_err(|e| FilecryptError::Crypto(format!("PBKDF2 failed: {e}")))?;
    Ok(())
}

/// Derive a fresh key of `key_length` bytes from `password`.
///
/// Deterministic: the same password and length always produce the same bytes.
///
/// # Example
///
/// ```
/// use filecrypt_rs::{derive_key, PasswordString};
///
/// let password = PasswordString::new("Secret123".to_string());
/// let a = derive_key(&password, 32)?;
/// let b = derive_key(&password, 32)?;
/// assert_eq!(a.expose_secret(), b.expose_secret());
/// # Ok::<(), filecrypt_rs::FilecryptError>(())
/// ```
pub fn derive_key(password: &PasswordString, key_length: usize) -> Result<DerivedKey, FilecryptError> {
    let mut key = DerivedKey::new(vec![0u8; key_length]);
    derive_key_into(password, key.expose_secret_mut())?;
    Ok(key)
}
