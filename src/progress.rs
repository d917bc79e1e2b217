//! # Progress Reporting
//!
//! Pure percentage computation over `(processed, total)` byte counts. The
//! pipeline produces one [`Progress`] per chunk; nothing here is persisted.

use std::fmt;

/// Bytes processed so far out of the expected payload length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    processed: u64,
    total: u64,
}

impl Progress {
    /// `total` is raised to `processed` if the payload turned out longer than
    /// expected, so a report never exceeds 100%.
    #[must_use]
    pub const fn new(processed: u64, total: u64) -> Self {
        let total = if processed > total { processed } else { total };
        Self { processed, total }
    }

    #[must_use]
    pub const fn processed(&self) -> u64 {
        self.processed
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Whole percent complete, `0..=100`. An empty payload is complete.
    #[must_use]
    pub const fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        // u128 so that processed * 100 cannot overflow for huge files
        ((self.processed as u128 * 100) / self.total as u128) as u8
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.processed == self.total
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% ({}/{} bytes)",
            self.percent(),
            self.processed,
            self.total
        )
    }
}
