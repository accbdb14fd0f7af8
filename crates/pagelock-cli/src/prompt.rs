//! Password acquisition for batch runs.
//!
//! The password comes from the `PAGELOCK_PASSWORD` override for
//! unattended automation, or from a masked interactive prompt. Protect
//! mode requires a confirmation re-entry that must match exactly; a
//! mismatch or empty input aborts the run before any document is
//! touched.

use std::io::IsTerminal;

use dialoguer::theme::ColorfulTheme;
use dialoguer::Password;
use zeroize::Zeroizing;

use pagelock_core::crypto::password::{validate_confirmation, validate_password};

/// Acquire the password for a batch run.
///
/// `confirm` requests the confirmation re-entry (protect mode). The
/// override value skips both the prompt and the confirmation.
pub fn acquire_password(
    override_value: Option<&str>,
    confirm: bool,
) -> anyhow::Result<Zeroizing<String>> {
    if let Some(value) = override_value {
        validate_password(value)?;
        return Ok(Zeroizing::new(value.to_string()));
    }

    if !std::io::stdin().is_terminal() {
        anyhow::bail!(
            "Interactive password input required. Set PAGELOCK_PASSWORD or run on a TTY."
        );
    }

    let theme = ColorfulTheme::default();
    let password = Zeroizing::new(
        Password::with_theme(&theme)
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?,
    );
    validate_password(&password)?;

    if confirm {
        let confirmation = Zeroizing::new(
            Password::with_theme(&theme)
                .with_prompt("Confirm password")
                .allow_empty_password(true)
                .interact()?,
        );
        validate_confirmation(&password, &confirmation)?;
    }

    Ok(password)
}
