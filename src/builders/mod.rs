// src/builders/mod.rs

//! Builders for runtime configuration.

pub mod filecrypt_builder;

pub use filecrypt_builder::FilecryptBuilder;
