//! Document transform: detecting, wrapping, and unwrapping protected
//! documents.
//!
//! A document is a UTF-8 text file with an optional front-matter block
//! (`---` delimited key-value lines) and a body. The protected form
//! keeps the original front matter verbatim, appends the protection
//! fields, and replaces the body with a marker-delimited base64
//! envelope:
//!
//! ```text
//! ---
//! title: Example
//! encrypted: true
//! encryptedAt: "2026-08-29T10:00:00.000Z"
//! ---
//!
//! <!-- ENCRYPTED_CONTENT -->
//! <base64 envelope text>
//! <!-- /ENCRYPTED_CONTENT -->
//! ```
//!
//! The plaintext fed to encryption is the ENTIRE original file, front
//! matter included, so unprotecting restores the file exactly.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{PagelockError, Result};
use crate::payload::{self, Envelope};

/// Opening marker for the embedded payload. Fixed and case-sensitive.
pub const MARKER_OPEN: &str = "<!-- ENCRYPTED_CONTENT -->";

/// Closing marker for the embedded payload.
pub const MARKER_CLOSE: &str = "<!-- /ENCRYPTED_CONTENT -->";

/// Split a document into its front-matter field lines and the rest.
///
/// The block must start at the very beginning of the document: a `---`
/// line, field lines, and a closing `---` line. Returns `None` when no
/// well-formed block is present.
fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let after_open = content.strip_prefix("---")?;
    let newline = after_open.find('\n')?;
    if !after_open[..newline].trim().is_empty() {
        // Not a front-matter fence, e.g. a horizontal rule with text.
        return None;
    }

    let fields_and_rest = &after_open[newline + 1..];
    let close = fields_and_rest.find("\n---")?;
    let fields = &fields_and_rest[..close];
    let rest = &fields_and_rest[close + "\n---".len()..];
    Some((fields, rest))
}

/// Whether the front-matter fields declare `encrypted: true`.
fn declares_encrypted(fields: &str) -> bool {
    fields.lines().any(|line| {
        line.trim()
            .strip_prefix("encrypted:")
            .is_some_and(|value| value.trim() == "true")
    })
}

/// Check whether a document is in protected form.
///
/// Both signals are consulted because a document may be mid-transition
/// or hand-edited: a marker block in the body OR a front-matter
/// `encrypted: true` flag counts as protected.
pub fn is_protected(content: &str) -> bool {
    if content.contains(MARKER_OPEN) {
        return true;
    }
    split_front_matter(content)
        .map(|(fields, _)| declares_encrypted(fields))
        .unwrap_or(false)
}

/// Locate and decode the embedded encrypted payload.
///
/// Surrounding whitespace inside the marker block is tolerated.
///
/// # Errors
///
/// - `PagelockError::MarkerNotFound` when the protection flag is set but
///   no complete marker block is present (inconsistent document)
/// - `PagelockError::NotProtected` when the document carries no
///   protection signal at all
/// - `PagelockError::MalformedPayload` when the block content does not
///   decode to an envelope
pub fn extract_payload(content: &str) -> Result<Envelope> {
    let Some(open) = content.find(MARKER_OPEN) else {
        if is_protected(content) {
            return Err(PagelockError::MarkerNotFound);
        }
        return Err(PagelockError::NotProtected);
    };

    let after_open = &content[open + MARKER_OPEN.len()..];
    let Some(close) = after_open.find(MARKER_CLOSE) else {
        return Err(PagelockError::MarkerNotFound);
    };

    payload::decode(after_open[..close].trim())
}

/// Produce the protected form of a document.
///
/// Appends `encrypted: true` and an `encryptedAt` timestamp to the
/// existing front matter, preserving all other fields and their order;
/// creates a block containing only the protection fields when the
/// document has none. The body becomes the marker-delimited envelope
/// text.
pub fn wrap_protected(
    content: &str,
    envelope_text: &str,
    encrypted_at: DateTime<Utc>,
) -> String {
    let stamp = encrypted_at.to_rfc3339_opts(SecondsFormat::Millis, true);

    match split_front_matter(content) {
        Some((fields, _rest)) => format!(
            "---\n{fields}\nencrypted: true\nencryptedAt: \"{stamp}\"\n---\n\n{MARKER_OPEN}\n{envelope_text}\n{MARKER_CLOSE}"
        ),
        None => format!(
            "---\nencrypted: true\nencryptedAt: \"{stamp}\"\n---\n\n{MARKER_OPEN}\n{envelope_text}\n{MARKER_CLOSE}"
        ),
    }
}

/// Produce the plain form of a document from decrypted plaintext.
///
/// The plaintext was the entire original file, so it verbatim becomes
/// the new document content. Protection fields disappear with the
/// replaced content; nothing is selectively stripped.
pub fn unwrap_protected(plaintext: String) -> String {
    plaintext
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto;

    fn sample_timestamp() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-08-29T10:00:00.000Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_plain_document_not_protected() {
        assert!(!is_protected("# Hello\n\nJust a page.\n"));
        assert!(!is_protected(""));
    }

    #[test]
    fn test_marker_signals_protected() {
        let content = format!("{}\nAAAA\n{}", MARKER_OPEN, MARKER_CLOSE);
        assert!(is_protected(&content));
    }

    #[test]
    fn test_front_matter_flag_signals_protected() {
        let content = "---\ntitle: Page\nencrypted: true\n---\n\nno marker here\n";
        assert!(is_protected(content));
    }

    #[test]
    fn test_front_matter_flag_false_not_protected() {
        let content = "---\nencrypted: false\n---\n\nbody\n";
        assert!(!is_protected(content));
    }

    #[test]
    fn test_horizontal_rule_is_not_front_matter() {
        // A leading "---" with trailing text on the same line is body text.
        let content = "--- not a fence\nencrypted: true\n";
        assert!(!is_protected(content));
    }

    #[test]
    fn test_wrap_preserves_front_matter_fields_and_order() {
        let content = "---\ntitle: My Page\nauthor: someone\n---\n\n# Body\n";
        let wrapped = wrap_protected(content, "QUJD", sample_timestamp());

        let title_pos = wrapped.find("title: My Page").unwrap();
        let author_pos = wrapped.find("author: someone").unwrap();
        let flag_pos = wrapped.find("encrypted: true").unwrap();
        assert!(title_pos < author_pos && author_pos < flag_pos);
        assert!(wrapped.contains("encryptedAt: \"2026-08-29T10:00:00.000Z\""));
        assert!(wrapped.contains(MARKER_OPEN));
        assert!(wrapped.contains(MARKER_CLOSE));
        assert!(!wrapped.contains("# Body"));
    }

    #[test]
    fn test_wrap_creates_front_matter_when_absent() {
        let wrapped = wrap_protected("# Bare page\n", "QUJD", sample_timestamp());
        assert!(wrapped.starts_with("---\nencrypted: true\n"));
        assert!(is_protected(&wrapped));
    }

    #[test]
    fn test_wrap_then_extract_round_trip() {
        let envelope = crypto::encrypt(b"# Body\n", "secret123").unwrap();
        let text = crate::payload::encode(&envelope);
        let wrapped = wrap_protected("# Body\n", &text, sample_timestamp());

        let extracted = extract_payload(&wrapped).unwrap();
        assert_eq!(extracted, envelope);
    }

    #[test]
    fn test_extract_tolerates_surrounding_whitespace() {
        let envelope = crypto::encrypt(b"body", "secret123").unwrap();
        let text = crate::payload::encode(&envelope);
        let content = format!("{}\n\n   {}  \n\n{}", MARKER_OPEN, text, MARKER_CLOSE);

        let extracted = extract_payload(&content).unwrap();
        assert_eq!(extracted, envelope);
    }

    #[test]
    fn test_extract_flag_without_marker_is_inconsistent() {
        let content = "---\nencrypted: true\n---\n\nmarker block went missing\n";
        let result = extract_payload(content);
        assert!(matches!(result, Err(PagelockError::MarkerNotFound)));
    }

    #[test]
    fn test_extract_unclosed_marker_is_inconsistent() {
        let content = format!("{}\nAAAA\n", MARKER_OPEN);
        let result = extract_payload(&content);
        assert!(matches!(result, Err(PagelockError::MarkerNotFound)));
    }

    #[test]
    fn test_extract_plain_document() {
        let result = extract_payload("# Hello\n");
        assert!(matches!(result, Err(PagelockError::NotProtected)));
    }

    #[test]
    fn test_unwrap_is_verbatim() {
        let plaintext = "---\ntitle: Restored\n---\n\n# Body\n".to_string();
        assert_eq!(unwrap_protected(plaintext.clone()), plaintext);
    }
}
