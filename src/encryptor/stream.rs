//! src/encryptor/stream.rs
//! Streaming AES-256-CTR encryption: `IV || ciphertext`

use crate::aliases::Iv16;
use crate::consts::IV_LENGTH;
use crate::crypto::random_iv;
use crate::encryptor::write::write_iv;
use crate::error::FilecryptError;
use crate::progress::Progress;
use crate::stream::{init_cipher, StreamControl, TransferContext};
use std::io::{Read, Write};

/// Encrypt `source` into `destination` under a freshly generated IV.
///
/// Writes the 16-byte IV first, then exactly as many ciphertext bytes as
/// `source` yields. `on_progress` is called after every chunk with the
/// plaintext byte count against `control.total()`.
///
/// Returns the total number of bytes written, IV included.
///
/// # Thread Safety
///
/// No shared mutable state: separate calls on separate streams may run on
/// separate threads.
///
/// # Example
///
/// ```
/// use filecrypt_rs::{derive_key, encrypt_stream, PasswordString, StreamControl};
/// use std::io::Cursor;
///
/// let password = PasswordString::new("Secret123".to_string());
/// let key = derive_key(&password, 32)?;
///
/// let mut encrypted = Vec::new();
/// let written = encrypt_stream(
///     Cursor::new(b"Hello, World!"),
///     &mut encrypted,
///     key.expose_secret(),
///     &StreamControl::new(13),
///     |_| {},
/// )?;
/// assert_eq!(written, 29);
/// assert_eq!(encrypted.len(), 29);
/// # Ok::<(), filecrypt_rs::FilecryptError>(())
/// ```
#[inline(always)]
pub fn encrypt_stream<R, W, P>(
    source: R,
    destination: W,
    key: &[u8],
    control: &StreamControl,
    on_progress: P,
) -> Result<u64, FilecryptError>
where
    R: Read,
    W: Write,
    P: FnMut(Progress),
{
    let iv = random_iv()?;
    encrypt_stream_with_iv(source, destination, key, &iv, control, on_progress)
}

/// [`encrypt_stream`] with a caller-chosen IV.
///
/// **Never reuse an IV with the same key.** CTR keystream reuse leaks the XOR of
/// the two plaintexts. This exists for known-answer testing.
#[doc(hidden)]
pub fn encrypt_stream_with_iv<R, W, P>(
    mut source: R,
    mut destination: W,
    key: &[u8],
    iv: &Iv16,
    control: &StreamControl,
    mut on_progress: P,
) -> Result<u64, FilecryptError>
where
    R: Read,
    W: Write,
    P: FnMut(Progress),
{
    // Cipher first so a bad key fails before anything is written
    let mut cipher = init_cipher(key, iv)?;

    write_iv(&mut destination, iv)?;

    let mut ctx = TransferContext::new(control);
    let written = ctx.run(&mut cipher, &mut source, &mut destination, &mut on_progress)?;

    Ok(IV_LENGTH as u64 + written)
}
