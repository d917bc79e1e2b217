// src/crypto/mod.rs

//! Low-level crypto primitives that are not the KDF.

pub mod rng;

pub use rng::random_iv;
