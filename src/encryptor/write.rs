//! src/encryptor/write.rs
//! Output framing helpers

use crate::aliases::Iv16;
use crate::error::FilecryptError;
use std::io::Write;

#[inline]
pub(crate) fn write_octets<W: Write>(writer: &mut W, data: &[u8]) -> Result<(), FilecryptError> {
    writer.write_all(data).map_err(FilecryptError::Io)
}

/// The IV is the whole header: no magic, version or salt precedes it.
#[inline]
pub fn write_iv<W: Write>(writer: &mut W, iv: &Iv16) -> Result<(), FilecryptError> {
    write_octets(writer, iv.expose_secret())
}
