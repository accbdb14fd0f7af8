//! Cryptographic operations for Pagelock.
//!
//! This module provides password-based authenticated encryption using
//! well-audited libraries:
//! - **AES-256-GCM**: Authenticated encryption (via the `aes-gcm` crate)
//! - **PBKDF2-HMAC-SHA256**: Iterated, salted key derivation
//!
//! ## Security Model
//!
//! - Every encryption generates a fresh random salt and nonce, so two
//!   encryptions of the same plaintext under the same password never
//!   produce the same envelope
//! - The GCM tag is verified before any plaintext is released
//! - Derived keys are zeroized from memory on drop
//! - No plaintext passwords are stored
//!
//! ## Threat Model
//!
//! We defend against:
//! - Readers of the published content tree without the password
//! - Offline brute-force attacks on the password (slowed by PBKDF2)
//!
//! We do NOT defend against:
//! - Observation of metadata (filenames, unencrypted front matter)
//! - A compromised viewing environment

pub mod engine;
pub mod key;
pub mod password;

pub use engine::{decrypt, encrypt, verify_password};
pub use key::{derive_key, DerivedKey};
pub use password::validate_password;

/// Salt length in bytes, generated fresh per encryption.
pub const SALT_LENGTH: usize = 64;

/// Nonce (IV) length in bytes. Never reused under the same key.
pub const NONCE_LENGTH: usize = 16;

/// GCM authentication tag length in bytes.
pub const TAG_LENGTH: usize = 16;

/// Derived key length in bytes (256-bit AES key).
pub const KEY_LENGTH: usize = 32;

/// PBKDF2 iteration count. Intentionally slow; do not lower for speed.
pub const PBKDF2_ITERATIONS: u32 = 100_000;
