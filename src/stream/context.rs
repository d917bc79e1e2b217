//! # Transfer Context
//!
//! The chunked read → keystream → write loop shared by both directions.
//!
//! CTR mode is symmetric and length preserving: encrypting and decrypting are
//! the same XOR with the keystream, so one loop serves both. Memory use is one
//! chunk buffer, allocated once and zeroized on drop, regardless of input size.

use crate::aliases::{Aes256Ctr, ChunkBuffer};
use crate::error::FilecryptError;
use crate::progress::Progress;
use crate::stream::control::StreamControl;
use aes::cipher::StreamCipher;
use std::io::{ErrorKind, Read, Write};

/// State for one pass over a payload.
pub struct TransferContext<'a> {
    chunk: ChunkBuffer,
    processed: u64,
    control: &'a StreamControl,
}

impl<'a> TransferContext<'a> {
    #[inline(always)]
    pub fn new(control: &'a StreamControl) -> Self {
        Self {
            chunk: ChunkBuffer::new(vec![0u8; control.chunk_size()]),
            processed: 0,
            control,
        }
    }

    /// Run the loop until `input` is exhausted.
    ///
    /// Cancellation is checked before every chunk. One [`Progress`] is reported
    /// per chunk. The last report is always complete: an empty payload, or one
    /// that ended short of the expected total, gets a final
    /// `processed/processed` report.
    ///
    /// # Errors
    ///
    /// - [`FilecryptError::Io`] on any read or write failure
    /// - [`FilecryptError::Cancelled`] if the control's flag is raised
    pub fn run<R, W, P>(
        &mut self,
        cipher: &mut Aes256Ctr,
        input: &mut R,
        output: &mut W,
        on_progress: &mut P,
    ) -> Result<u64, FilecryptError>
    where
        R: Read,
        W: Write,
        P: FnMut(Progress),
    {
        loop {
            if self.control.cancel().is_cancelled() {
                return Err(FilecryptError::Cancelled);
            }

            let n = fill_chunk(input, self.chunk.expose_secret_mut())?;
            if n == 0 {
                break;
            }

            let data = &mut self.chunk.expose_secret_mut()[..n];
            cipher.apply_keystream(data);
            output.write_all(data)?;

            self.processed += n as u64;
            on_progress(Progress::new(self.processed, self.control.total()));
        }

        if self.processed == 0 || self.processed < self.control.total() {
            on_progress(Progress::new(self.processed, self.processed));
        }

        output.flush()?;
        Ok(self.processed)
    }
}

/// Read until `buf` is full or the reader hits EOF; retries `Interrupted`.
#[inline]
fn fill_chunk<R: Read>(input: &mut R, buf: &mut [u8]) -> Result<usize, FilecryptError> {
    let mut filled = 0;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(FilecryptError::Io(e)),
        }
    }
    Ok(filled)
}
