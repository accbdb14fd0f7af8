//! Password validation.
//!
//! Enforced before any batch run touches a document: an empty or
//! whitespace-only password is rejected, and interactive confirmation
//! must match exactly.

use crate::error::{PagelockError, Result};

/// Validate that a password is usable for encryption.
///
/// # Errors
///
/// Returns `PagelockError::PasswordPolicy` for an empty or
/// whitespace-only password.
pub fn validate_password(password: &str) -> Result<()> {
    if password.trim().is_empty() {
        return Err(PagelockError::PasswordPolicy(
            "Password cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate an interactive confirmation re-entry.
///
/// # Errors
///
/// Returns `PagelockError::PasswordPolicy` when the two entries differ.
pub fn validate_confirmation(password: &str, confirmation: &str) -> Result<()> {
    if password != confirmation {
        return Err(PagelockError::PasswordPolicy(
            "Passwords do not match".to_string(),
        ));
    }
    Ok(())
}
