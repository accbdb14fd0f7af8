//! Encrypted payload envelope and its transport encoding.
//!
//! The wire form of an envelope is the ordered concatenation
//! `salt ∥ nonce ∥ tag ∥ ciphertext`, base64-encoded so it can be
//! embedded in a text document. Anything shorter than the three fixed
//! sections is malformed by definition.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::crypto::{NONCE_LENGTH, SALT_LENGTH, TAG_LENGTH};
use crate::error::{PagelockError, Result};

/// Minimum byte length of a decoded envelope (empty ciphertext allowed).
pub const MIN_ENVELOPE_LENGTH: usize = SALT_LENGTH + NONCE_LENGTH + TAG_LENGTH;

/// One encrypted payload: the output of a single encryption operation.
///
/// The salt and nonce are not secret; they are stored alongside the
/// ciphertext so decryption can re-derive the key and verify the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub(crate) salt: [u8; SALT_LENGTH],
    pub(crate) nonce: [u8; NONCE_LENGTH],
    pub(crate) tag: [u8; TAG_LENGTH],
    pub(crate) ciphertext: Vec<u8>,
}

impl Envelope {
    /// Serialize to the wire form `salt ∥ nonce ∥ tag ∥ ciphertext`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(MIN_ENVELOPE_LENGTH + self.ciphertext.len());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Parse the wire form back into sections.
    ///
    /// # Errors
    ///
    /// Returns `PagelockError::MalformedPayload` if the input is shorter
    /// than the fixed salt + nonce + tag sections.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < MIN_ENVELOPE_LENGTH {
            return Err(PagelockError::MalformedPayload(format!(
                "envelope is {} bytes, minimum is {}",
                bytes.len(),
                MIN_ENVELOPE_LENGTH
            )));
        }

        let (salt, rest) = bytes.split_at(SALT_LENGTH);
        let (nonce, rest) = rest.split_at(NONCE_LENGTH);
        let (tag, ciphertext) = rest.split_at(TAG_LENGTH);

        Ok(Self {
            salt: salt.try_into().expect("salt slice has fixed length"),
            nonce: nonce.try_into().expect("nonce slice has fixed length"),
            tag: tag.try_into().expect("tag slice has fixed length"),
            ciphertext: ciphertext.to_vec(),
        })
    }
}

/// Base64-encode an envelope for embedding in a text document.
pub fn encode(envelope: &Envelope) -> String {
    STANDARD.encode(envelope.to_bytes())
}

/// Decode base64 payload text back into an envelope.
///
/// # Errors
///
/// Returns `PagelockError::MalformedPayload` if the text is not valid
/// base64 or decodes shorter than the minimum envelope length.
pub fn decode(text: &str) -> Result<Envelope> {
    let bytes = STANDARD
        .decode(text)
        .map_err(|e| PagelockError::MalformedPayload(format!("invalid base64: {}", e)))?;
    Envelope::from_bytes(&bytes)
}
