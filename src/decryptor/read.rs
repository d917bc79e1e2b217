//! src/decryptor/read.rs
//! IV framing for encrypted input

use crate::aliases::Iv16;
use crate::consts::IV_LENGTH;
use crate::error::FilecryptError;
use std::io::{ErrorKind, Read};

/// Read exactly [`IV_LENGTH`] bytes from the front of `reader`.
///
/// Unlike `read_exact`, a short input is reported as
/// [`FilecryptError::Framing`] with the number of bytes actually present, not
/// as an `UnexpectedEof` I/O error.
#[inline(always)]
pub fn read_iv<R>(reader: &mut R) -> Result<Iv16, FilecryptError>
where
    R: Read,
{
    let mut iv = Iv16::new([0u8; IV_LENGTH]);
    let mut filled = 0;

    while filled < IV_LENGTH {
        match reader.read(&mut iv.expose_secret_mut()[filled..]) {
            Ok(0) => {
                return Err(FilecryptError::Framing(format!(
                    "input is {filled} bytes, shorter than the {IV_LENGTH}-byte IV"
                )));
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(FilecryptError::Io(e)),
        }
    }
    Ok(iv)
}
