//! `pagelock unprotect`: decrypt every protected document.

use pagelock_core::batch::{unprotect_file, FileOutcome, RunSummary};
use pagelock_core::is_protected;

use crate::cli::{Cli, PasswordArgs};
use crate::commands::prepare_run;
use crate::prompt::acquire_password;
use crate::ui::{Badge, UiContext};

pub fn run(cli: &Cli, args: &PasswordArgs) -> anyhow::Result<i32> {
    let ui = UiContext::from_env();
    ui.header("Pagelock · unprotect");

    let Some(run) = prepare_run(cli, &ui) else {
        return Ok(0);
    };

    let protected = run
        .files
        .iter()
        .filter(|file| {
            std::fs::read_to_string(file)
                .map(|content| is_protected(&content))
                .unwrap_or(true)
        })
        .count();

    if protected == 0 {
        ui.info(&format!(
            "All {} documents are already plain; nothing to do.",
            run.files.len()
        ));
        return Ok(0);
    }

    ui.info(&format!(
        "Found {} documents, {} to unprotect",
        run.files.len(),
        protected
    ));

    // No confirmation re-entry on decrypt: a typo fails safely.
    let password = acquire_password(args.password.as_deref(), false)?;

    let mut summary = RunSummary::default();
    for file in &run.files {
        let result = unprotect_file(file, &password);
        let path = run.display_path(file);
        match &result {
            Ok(FileOutcome::Converted) => ui.status(Badge::Ok, &path, None),
            Ok(_) => ui.status(Badge::Skip, &path, Some("not protected")),
            Err(e) => ui.status(Badge::Fail, &path, Some(&e.to_string())),
        }
        summary.record(&result);
    }

    ui.summary(
        summary.converted,
        summary.skipped,
        summary.failed,
        "not protected",
    );

    Ok(if summary.is_clean() { 0 } else { 1 })
}
