//! src/decryptor/stream.rs
//! Streaming AES-256-CTR decryption of `IV || ciphertext`

use crate::decryptor::read::read_iv;
use crate::error::FilecryptError;
use crate::progress::Progress;
use crate::stream::{init_cipher, StreamControl, TransferContext};
use std::io::{Read, Write};

/// Decrypt `source` (IV followed by ciphertext) into `destination`.
///
/// `control.total()` should be the ciphertext length, i.e. the input length
/// minus the IV. Returns the number of plaintext bytes written.
///
/// There is no integrity tag: a wrong key or tampered ciphertext decrypts
/// without error to the wrong bytes.
///
/// # Errors
///
/// - [`FilecryptError::Framing`] if `source` holds fewer than 16 bytes; nothing
///   is written and no cipher is created
/// - [`FilecryptError::Crypto`] if `key` is not 32 bytes
/// - [`FilecryptError::Io`] / [`FilecryptError::Cancelled`] from the chunk loop
#[inline(always)]
pub fn decrypt_stream<R, W, P>(
    mut source: R,
    mut destination: W,
    key: &[u8],
    control: &StreamControl,
    mut on_progress: P,
) -> Result<u64, FilecryptError>
where
    R: Read,
    W: Write,
    P: FnMut(Progress),
{
    let iv = read_iv(&mut source)?;
    let mut cipher = init_cipher(key, &iv)?;

    let mut ctx = TransferContext::new(control);
    ctx.run(&mut cipher, &mut source, &mut destination, &mut on_progress)
}
