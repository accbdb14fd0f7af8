//! Error types for Pagelock core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for Pagelock operations.
pub type Result<T> = std::result::Result<T, PagelockError>;

/// Core error type for Pagelock operations.
#[derive(Debug, Error)]
pub enum PagelockError {
    /// Authenticated decryption failed.
    ///
    /// Deliberately does not distinguish a wrong password from a
    /// corrupted or tampered envelope. Callers must not add detail
    /// that would let an observer tell the two apart.
    #[error("Decryption failed: wrong password or corrupted data")]
    Authentication,

    /// Payload text cannot be decoded into the minimum envelope structure
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Document declares the protection flag but carries no marker block
    #[error("Document is marked encrypted but contains no encrypted-content block")]
    MarkerNotFound,

    /// Document carries no protection signal at all
    #[error("Document is not protected")]
    NotProtected,

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Empty password or confirmation mismatch during interactive setup
    #[error("Password policy violation: {0}")]
    PasswordPolicy(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Encryption-side failure (key setup, cipher initialization)
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
