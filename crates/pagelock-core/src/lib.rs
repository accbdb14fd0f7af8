//! # Pagelock Core
//!
//! Core library for Pagelock - password-based content protection for a
//! markdown content tree. Selected documents are encrypted before a
//! public build ships and stay unreadable until a viewer supplies the
//! correct password.
//!
//! ## Architecture
//!
//! - **crypto**: Key derivation and authenticated encryption
//! - **payload**: The salt/nonce/tag/ciphertext envelope and its base64 form
//! - **document**: Protected-document detection, wrapping, and extraction
//! - **scan**: Markdown discovery under the protected folders
//! - **config**: Typed protection settings with a degrade-to-disabled policy
//! - **batch**: Per-document protect/unprotect conversions and tallying
//! - **viewer**: The view-time decrypt/prompt/cache state machine
//! - **session**: The single-slot session password cache

pub mod batch;
pub mod config;
pub mod crypto;
pub mod document;
pub mod error;
pub mod fs;
pub mod payload;
pub mod scan;
pub mod session;
pub mod viewer;

pub use batch::{protect_file, unprotect_file, FileOutcome, RunSummary};
pub use config::{load_config, read_config, ProtectionConfig};
pub use document::{extract_payload, is_protected, unwrap_protected, wrap_protected};
pub use error::{PagelockError, Result};
pub use payload::Envelope;
pub use scan::scan_markdown_files;
pub use session::SessionCache;
pub use viewer::{ViewState, Viewer};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
