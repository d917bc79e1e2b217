// src/decryptor/mod.rs

//! Decryption direction of the pipeline.
//!
//! Core API: `decrypt_stream(src, dst, key, &control, on_progress)?`.
//! Helper: `read_iv` for callers that frame the input themselves.

pub(crate) mod read;
pub(crate) mod stream;

pub use read::read_iv;
pub use stream::decrypt_stream;
