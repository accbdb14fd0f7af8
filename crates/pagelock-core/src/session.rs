//! Session password cache.
//!
//! Holds at most one verified password for the lifetime of a browsing
//! session. The cache is an explicit context object handed to the
//! viewer, not ambient global state, which also makes it substitutable
//! in tests. It is created empty, written on the first successful
//! verification, overwritten (never merged) on each later success, and
//! zeroized when the session ends.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// At most one verified password for the current session.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct SessionCache {
    password: Option<String>,
}

impl SessionCache {
    /// Create an empty cache for a new session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a verified password, replacing any previous value.
    pub fn store(&mut self, password: &str) {
        self.password.zeroize();
        self.password = Some(password.to_string());
    }

    /// The cached password, if any.
    pub fn get(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Forget the cached password (session end).
    pub fn clear(&mut self) {
        self.password.zeroize();
    }

    pub fn is_empty(&self) -> bool {
        self.password.is_none()
    }
}

impl std::fmt::Debug for SessionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCache")
            .field(
                "password",
                &self.password.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
