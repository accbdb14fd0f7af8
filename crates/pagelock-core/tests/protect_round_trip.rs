use std::fs;
use std::path::Path;

use chrono::Utc;
use tempfile::tempdir;

use pagelock_core::batch::{protect_file, unprotect_file, FileOutcome, RunSummary};
use pagelock_core::{is_protected, scan_markdown_files, PagelockError};

fn write_doc(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn test_protect_then_unprotect_restores_exactly() {
    let dir = tempdir().unwrap();
    let doc = dir.path().join("welcome.md");
    write_doc(&doc, "# Welcome");

    let outcome = protect_file(&doc, "secret123", Utc::now()).unwrap();
    assert_eq!(outcome, FileOutcome::Converted);

    let protected = fs::read_to_string(&doc).unwrap();
    assert!(protected.contains("encrypted: true"));
    assert!(protected.contains("<!-- ENCRYPTED_CONTENT -->"));
    assert!(!protected.contains("# Welcome"));
    assert!(is_protected(&protected));

    let outcome = unprotect_file(&doc, "secret123").unwrap();
    assert_eq!(outcome, FileOutcome::Converted);
    assert_eq!(fs::read_to_string(&doc).unwrap(), "# Welcome");
}

#[test]
fn test_wrong_password_leaves_file_unchanged() {
    let dir = tempdir().unwrap();
    let doc = dir.path().join("welcome.md");
    write_doc(&doc, "# Welcome");

    protect_file(&doc, "secret123", Utc::now()).unwrap();
    let protected = fs::read_to_string(&doc).unwrap();

    let result = unprotect_file(&doc, "wrong");
    assert!(matches!(result, Err(PagelockError::Authentication)));
    assert_eq!(fs::read_to_string(&doc).unwrap(), protected);
}

#[test]
fn test_second_protect_run_is_idempotent() {
    let dir = tempdir().unwrap();
    let doc = dir.path().join("page.md");
    write_doc(&doc, "---\ntitle: Page\n---\n\nbody\n");

    protect_file(&doc, "secret123", Utc::now()).unwrap();
    let first_pass = fs::read_to_string(&doc).unwrap();

    let outcome = protect_file(&doc, "secret123", Utc::now()).unwrap();
    assert_eq!(outcome, FileOutcome::AlreadyProtected);
    // Skipped means untouched, not re-encrypted.
    assert_eq!(fs::read_to_string(&doc).unwrap(), first_pass);
}

#[test]
fn test_unprotect_skips_plain_documents() {
    let dir = tempdir().unwrap();
    let doc = dir.path().join("plain.md");
    write_doc(&doc, "# Plain\n");

    let outcome = unprotect_file(&doc, "secret123").unwrap();
    assert_eq!(outcome, FileOutcome::NotProtected);
    assert_eq!(fs::read_to_string(&doc).unwrap(), "# Plain\n");
}

#[test]
fn test_front_matter_survives_round_trip() {
    let dir = tempdir().unwrap();
    let doc = dir.path().join("meta.md");
    let original = "---\ntitle: Kept\nauthor: someone\n---\n\n# Body\n";
    write_doc(&doc, original);

    protect_file(&doc, "secret123", Utc::now()).unwrap();
    let protected = fs::read_to_string(&doc).unwrap();
    // Non-protection fields stay readable in the protected form.
    assert!(protected.contains("title: Kept"));
    assert!(protected.contains("author: someone"));

    unprotect_file(&doc, "secret123").unwrap();
    assert_eq!(fs::read_to_string(&doc).unwrap(), original);
}

#[test]
fn test_batch_isolates_per_document_failures() {
    let dir = tempdir().unwrap();

    // Three documents protected under one password, one under another.
    let paths = [
        dir.path().join("a.md"),
        dir.path().join("b.md"),
        dir.path().join("sub/c.md"),
        dir.path().join("odd-one-out.md"),
    ];
    for path in &paths[..3] {
        write_doc(path, "# shared\n");
        protect_file(path, "shared-password", Utc::now()).unwrap();
    }
    write_doc(&paths[3], "# other\n");
    protect_file(&paths[3], "different-password", Utc::now()).unwrap();

    let files = scan_markdown_files(&[dir.path()]);
    assert_eq!(files.len(), 4);

    let mut summary = RunSummary::default();
    for file in &files {
        summary.record(&unprotect_file(file, "shared-password"));
    }

    // One bad document does not abort the batch: N-1 succeed, 1 fails.
    assert_eq!(summary.converted, 3);
    assert_eq!(summary.failed, 1);
    assert!(!summary.is_clean());

    // The failing document is still intact and protected.
    assert!(is_protected(&fs::read_to_string(&paths[3]).unwrap()));
}

#[test]
fn test_scan_of_empty_roots_yields_no_work() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("not-configured");

    let files = scan_markdown_files(&[missing]);
    assert!(files.is_empty());

    let summary = RunSummary::default();
    assert!(summary.is_clean());
    assert_eq!(summary.total(), 0);
}
