//! Authenticated encryption and decryption of payload envelopes.
//!
//! AES-256-GCM with a 16-byte nonce and no associated data. The salt and
//! nonce are generated fresh from the OS random source for every
//! encryption, so identical plaintext under the same password never
//! yields the same envelope.

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::aes::Aes256;
use aes_gcm::{AesGcm, Nonce};
use rand::rngs::OsRng;
use rand::RngCore;

use super::key::derive_key;
use super::{NONCE_LENGTH, SALT_LENGTH, TAG_LENGTH};
use crate::error::{PagelockError, Result};
use crate::payload::Envelope;

/// AES-256-GCM with the 16-byte nonce used by the envelope format.
type Cipher = AesGcm<Aes256, U16>;

fn cipher_for(password: &str, salt: &[u8]) -> Result<Cipher> {
    let key = derive_key(password, salt)?;
    Cipher::new_from_slice(key.as_bytes())
        .map_err(|e| PagelockError::Crypto(format!("cipher initialization failed: {}", e)))
}

/// Encrypt plaintext under a password, producing a fresh envelope.
///
/// Generates a random salt and nonce, derives the key, and runs
/// authenticated encryption. Every call produces a different envelope
/// for identical input; that freshness is a required property, not an
/// accident.
///
/// # Errors
///
/// Returns `PagelockError::InvalidInput` for an empty password, or
/// `PagelockError::Crypto` if cipher setup fails.
pub fn encrypt(plaintext: &[u8], password: &str) -> Result<Envelope> {
    let mut salt = [0u8; SALT_LENGTH];
    OsRng.fill_bytes(&mut salt);

    let mut nonce_bytes = [0u8; NONCE_LENGTH];
    OsRng.fill_bytes(&mut nonce_bytes);

    let cipher = cipher_for(password, &salt)?;
    let nonce = Nonce::from_slice(&nonce_bytes);

    // The aes-gcm crate appends the tag to the ciphertext; the envelope
    // stores the tag before the ciphertext, so split it back off.
    let mut sealed = cipher
        .encrypt(nonce, plaintext)
        .map_err(|_| PagelockError::Crypto("encryption failed".to_string()))?;
    let tag_bytes = sealed.split_off(sealed.len() - TAG_LENGTH);
    let tag = <[u8; TAG_LENGTH]>::try_from(tag_bytes.as_slice())
        .map_err(|_| PagelockError::Crypto("unexpected tag length".to_string()))?;

    Ok(Envelope {
        salt,
        nonce: nonce_bytes,
        tag,
        ciphertext: sealed,
    })
}

/// Decrypt an envelope, verifying the authentication tag before any
/// plaintext is released.
///
/// # Errors
///
/// Returns `PagelockError::Authentication` when the tag does not verify.
/// A wrong password, a corrupted envelope, and deliberate tampering are
/// indistinguishable here by design; no partial plaintext is ever
/// returned on failure.
pub fn decrypt(envelope: &Envelope, password: &str) -> Result<Vec<u8>> {
    let cipher = cipher_for(password, &envelope.salt)?;
    let nonce = Nonce::from_slice(&envelope.nonce);

    let mut sealed = Vec::with_capacity(envelope.ciphertext.len() + TAG_LENGTH);
    sealed.extend_from_slice(&envelope.ciphertext);
    sealed.extend_from_slice(&envelope.tag);

    cipher
        .decrypt(nonce, sealed.as_slice())
        .map_err(|_| PagelockError::Authentication)
}

/// Check whether a password decrypts an envelope, without exposing the
/// plaintext to the caller.
pub fn verify_password(envelope: &Envelope, password: &str) -> bool {
    decrypt(envelope, password).is_ok()
}
