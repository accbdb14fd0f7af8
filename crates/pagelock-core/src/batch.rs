//! Per-document conversion operations and run tallying.
//!
//! Each conversion is read → classify → transform → atomic write for
//! one document, so a failure (wrong password, I/O error, malformed
//! payload) is isolated to that document and the batch continues.
//! Processing is sequential by design: one document is fully rewritten
//! before the next begins.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::crypto;
use crate::document;
use crate::error::{PagelockError, Result};
use crate::fs::write_atomic;
use crate::payload;

/// What happened to one document during a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Document was converted and written back.
    Converted,
    /// Protect mode: document already carried the protected form.
    AlreadyProtected,
    /// Unprotect mode: document carried no protection signal.
    NotProtected,
}

impl FileOutcome {
    pub fn is_skip(&self) -> bool {
        !matches!(self, FileOutcome::Converted)
    }
}

/// Encrypt one document in place.
///
/// Already-protected documents are skipped untouched, which is what
/// makes a second protect run over the same tree a no-op. The entire
/// file content (front matter included) is the encryption plaintext.
pub fn protect_file(path: &Path, password: &str, now: DateTime<Utc>) -> Result<FileOutcome> {
    let content = std::fs::read_to_string(path)?;
    if document::is_protected(&content) {
        return Ok(FileOutcome::AlreadyProtected);
    }

    let envelope = crypto::encrypt(content.as_bytes(), password)?;
    let envelope_text = payload::encode(&envelope);
    let wrapped = document::wrap_protected(&content, &envelope_text, now);
    write_atomic(path, &wrapped)?;

    Ok(FileOutcome::Converted)
}

/// Decrypt one document in place.
///
/// A wrong password fails before anything is written, leaving the file
/// unchanged. Unprotected documents are skipped untouched.
pub fn unprotect_file(path: &Path, password: &str) -> Result<FileOutcome> {
    let content = std::fs::read_to_string(path)?;
    if !document::is_protected(&content) {
        return Ok(FileOutcome::NotProtected);
    }

    let envelope = document::extract_payload(&content)?;
    let plaintext = crypto::decrypt(&envelope, password)?;
    let text = String::from_utf8(plaintext)
        .map_err(|_| PagelockError::MalformedPayload("plaintext is not UTF-8".to_string()))?;
    let restored = document::unwrap_protected(text);
    write_atomic(path, &restored)?;

    Ok(FileOutcome::Converted)
}

/// Tally of a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Record one document's result.
    pub fn record(&mut self, result: &Result<FileOutcome>) {
        match result {
            Ok(FileOutcome::Converted) => self.converted += 1,
            Ok(_) => self.skipped += 1,
            Err(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.converted + self.skipped + self.failed
    }

    /// A run succeeds only when no document failed.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_record_and_exit_condition() {
        let mut summary = RunSummary::default();
        summary.record(&Ok(FileOutcome::Converted));
        summary.record(&Ok(FileOutcome::AlreadyProtected));
        summary.record(&Ok(FileOutcome::NotProtected));
        summary.record(&Err(PagelockError::Authentication));

        assert_eq!(summary.converted, 1);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total(), 4);
        assert!(!summary.is_clean());
    }

    #[test]
    fn test_clean_summary() {
        let mut summary = RunSummary::default();
        summary.record(&Ok(FileOutcome::Converted));
        assert!(summary.is_clean());
    }
}
