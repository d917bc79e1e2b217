//! Parallel processing of independent file pairs (feature `batch-ops`).
//!
//! Each pair gets its own key, IV and streams; only the engine's logger and
//! filesystem are shared.

use rayon::prelude::*;
use std::path::PathBuf;

use crate::aliases::PasswordString;
use crate::engine::Filecrypt;
use crate::error::FilecryptError;
use crate::fs::FileSystem;
use crate::logger::Logger;

/// Encrypt every `(source, destination)` pair in parallel.
///
/// Stops at the first failure; pairs already finished keep their output.
pub fn encrypt_batch<F, L>(
    engine: &Filecrypt<F, L>,
    batch: &[(PathBuf, PathBuf)],
    password: &PasswordString,
) -> Result<(), FilecryptError>
where
    F: FileSystem,
    L: Logger,
{
    batch
        .par_iter()
        .try_for_each(|(src, dst)| engine.encrypt_file(src, dst, password).map(drop))
}

/// Decrypt every `(source, destination)` pair in parallel.
pub fn decrypt_batch<F, L>(
    engine: &Filecrypt<F, L>,
    batch: &[(PathBuf, PathBuf)],
    password: &PasswordString,
) -> Result<(), FilecryptError>
where
    F: FileSystem,
    L: Logger,
{
    batch
        .par_iter()
        .try_for_each(|(src, dst)| engine.decrypt_file(src, dst, password).map(drop))
}
