//! # Key Derivation
//!
//! Turns a password into a fixed-length AES key.
//!
//! Only PBKDF2-HMAC-SHA256 with an embedded salt is supported; there is no
//! per-file salt and nothing about the KDF is recorded in the output file.

pub mod pbkdf2;

pub use self::pbkdf2::{derive_key, derive_key_into};
