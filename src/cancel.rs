//! Cooperative cancellation for long-running stream operations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag polled by the pipeline before each chunk.
///
/// Clones share state: cancel from any thread and every operation holding a
/// clone stops at its next chunk boundary with
/// [`FilecryptError::Cancelled`](crate::FilecryptError::Cancelled). A chunk that
/// is already being transformed is always finished first.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
