//! Runtime decryption client.
//!
//! Drives the view-time state machine for one document:
//!
//! ```text
//! Idle → Detecting → { PlainDisplay
//!                    | AutoDecrypting → (Displayed | Prompting) }
//!      → Prompting → Verifying → (Displayed | Prompting-with-error)
//! ```
//!
//! The viewer never mutates stored documents, only the in-memory view.
//! Decryption is synchronous and fast relative to a UI frame, so
//! `Verifying` resolves within the submitting call; a submission made
//! in any state other than `Prompting` is ignored, which is what keeps
//! a single attempt in flight per document view.

use crate::crypto;
use crate::document;
use crate::error::Result;
use crate::payload::Envelope;
use crate::session::SessionCache;

/// Generic prompt error. Never exposes whether the failure was a wrong
/// password or corrupted data.
pub const INCORRECT_PASSWORD_MESSAGE: &str = "Incorrect password";

/// Observable state of one document view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// No document loaded yet.
    Idle,
    /// Document was not protected; shown as-is. Terminal.
    PlainDisplay,
    /// Decryption succeeded; content available. Terminal.
    Displayed,
    /// Waiting for the viewer to supply a password.
    Prompting {
        /// Present only after a user-submitted password failed. The
        /// silent auto-decrypt path never sets it.
        error: Option<String>,
    },
    /// Prompt was cancelled; content stays hidden. Terminal.
    Withheld,
}

impl ViewState {
    fn prompting(&self) -> bool {
        matches!(self, ViewState::Prompting { .. })
    }
}

/// One document's view-time decryption lifecycle.
pub struct Viewer {
    state: ViewState,
    envelope: Option<Envelope>,
    content: Option<String>,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewer {
    pub fn new() -> Self {
        Self {
            state: ViewState::Idle,
            envelope: None,
            content: None,
        }
    }

    /// Receive a document body and decide how to display it.
    ///
    /// Plain documents display immediately. For protected documents,
    /// a cached password triggers one silent decryption attempt: on
    /// success the document displays and the cache is left untouched;
    /// on failure the prompt opens WITHOUT an error, since the cached
    /// password was never confirmed for this document. With no cached
    /// password the prompt opens directly.
    pub fn load(&mut self, body: &str, cache: &SessionCache) -> &ViewState {
        if !document::is_protected(body) {
            self.content = Some(body.to_string());
            self.state = ViewState::PlainDisplay;
            return &self.state;
        }

        match document::extract_payload(body) {
            Ok(envelope) => {
                self.envelope = Some(envelope);
                match cache.get() {
                    Some(password) => {
                        if self.try_decrypt(password).is_ok() {
                            self.state = ViewState::Displayed;
                        } else {
                            // Silent failure: no error before the user
                            // has even been asked.
                            self.state = ViewState::Prompting { error: None };
                        }
                    }
                    None => {
                        self.state = ViewState::Prompting { error: None };
                    }
                }
            }
            Err(_) => {
                // Flag set but no decodable payload: nothing to decrypt,
                // nothing to show. Treat as withheld content.
                self.state = ViewState::Withheld;
            }
        }
        &self.state
    }

    /// Handle a password submitted from the prompt.
    ///
    /// Ignored unless the view is currently `Prompting`. On success the
    /// password is stored in the session cache (overwriting any prior
    /// value) and the document displays; on failure the prompt stays
    /// open with a generic error, allowing unlimited retries.
    pub fn submit_password(&mut self, password: &str, cache: &mut SessionCache) -> &ViewState {
        if !self.state.prompting() {
            return &self.state;
        }

        if self.try_decrypt(password).is_ok() {
            cache.store(password);
            self.state = ViewState::Displayed;
        } else {
            self.state = ViewState::Prompting {
                error: Some(INCORRECT_PASSWORD_MESSAGE.to_string()),
            };
        }
        &self.state
    }

    /// Dismiss the prompt without decrypting. The document stays hidden
    /// and the cache is not touched.
    pub fn cancel(&mut self) -> &ViewState {
        if self.state.prompting() {
            self.state = ViewState::Withheld;
        }
        &self.state
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The displayable content: the decrypted plaintext for protected
    /// documents, the body itself for plain ones. `None` until a
    /// display state is reached.
    pub fn content(&self) -> Option<&str> {
        match self.state {
            ViewState::PlainDisplay | ViewState::Displayed => self.content.as_deref(),
            _ => None,
        }
    }

    fn try_decrypt(&mut self, password: &str) -> Result<()> {
        let envelope = self
            .envelope
            .as_ref()
            .ok_or(crate::error::PagelockError::NotProtected)?;
        let plaintext = crypto::decrypt(envelope, password)?;
        let text = String::from_utf8(plaintext).map_err(|_| {
            // Undecodable plaintext is reported like any other failure.
            crate::error::PagelockError::Authentication
        })?;
        self.content = Some(text);
        Ok(())
    }
}
