// src/encryptor/mod.rs

//! Encryption direction of the pipeline.
//!
//! Core API: `encrypt_stream(src, dst, key, &control, on_progress)?`.

pub(crate) mod stream;
pub(crate) mod write;

pub use stream::encrypt_stream;
#[doc(hidden)]
pub use stream::encrypt_stream_with_iv;
pub use write::write_iv;
