//! src/stream/control.rs
//! Per-call knobs for the chunk loop.

use crate::cancel::CancelFlag;
use crate::consts::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE, MIN_CHUNK_SIZE};

/// Chunk size, expected payload length and cancellation signal for one stream
/// operation.
///
/// `total` only feeds progress reports; the loop always runs to end of input.
#[derive(Debug, Clone)]
pub struct StreamControl {
    chunk_size: usize,
    total: u64,
    cancel: CancelFlag,
}

impl StreamControl {
    #[must_use]
    pub fn new(total: u64) -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            total,
            cancel: CancelFlag::new(),
        }
    }

    /// Clamped to `MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE`.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.clamp(MIN_CHUNK_SIZE, MAX_CHUNK_SIZE);
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub fn cancel(&self) -> &CancelFlag {
        &self.cancel
    }
}

impl Default for StreamControl {
    fn default() -> Self {
        Self::new(0)
    }
}
