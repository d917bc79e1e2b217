//! # Secure-Gate Type Aliases
//!
//! Every secret handled by the engine lives in a [`secure-gate`](https://github.com/Slurp9187/secure-gate)
//! wrapper: the password, the derived key, the IV and the chunk buffer that
//! carries plaintext through the pipeline. Wrappers zeroize on drop and require
//! an explicit `.expose_secret()` / `.expose_secret_mut()` to touch the bytes.
//!
//! ## Type Categories
//!
//! ### Dynamic Secrets
//! - [`PasswordString`] - user password
//! - [`DerivedKey`] - KDF output of caller-chosen length
//! - [`ChunkBuffer`] - heap chunk buffer reused for the whole stream
//!
//! ### Fixed-Size Secrets
//! - [`Aes256Key32`] - 32-byte AES-256 key
//! - [`Iv16`] - 16-byte initialization vector / initial counter block

use aes::Aes256;
use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

// ─────────────────────────────────────────────────────────────────────────────
// Cipher
// ─────────────────────────────────────────────────────────────────────────────
/// AES-256 in CTR mode with a full 128-bit big-endian counter.
pub type Aes256Ctr = ctr::Ctr128BE<Aes256>;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(pub PasswordString, String);
dynamic_alias!(pub DerivedKey, Vec<u8>); // KDF output, 16/24/32 bytes
dynamic_alias!(pub ChunkBuffer, Vec<u8>); // reused for the whole stream

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size concrete secrets
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(pub Aes256Key32, 32); // engine key
fixed_alias!(pub Iv16, 16); // per-file IV, initial counter block
