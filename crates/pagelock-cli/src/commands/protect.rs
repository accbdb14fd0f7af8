//! `pagelock protect`: encrypt every unprotected document.

use chrono::Utc;

use pagelock_core::batch::{protect_file, FileOutcome, RunSummary};
use pagelock_core::is_protected;

use crate::cli::{Cli, PasswordArgs};
use crate::commands::prepare_run;
use crate::prompt::acquire_password;
use crate::ui::{Badge, UiContext};

pub fn run(cli: &Cli, args: &PasswordArgs) -> anyhow::Result<i32> {
    let ui = UiContext::from_env();
    ui.header("Pagelock · protect");

    let Some(run) = prepare_run(cli, &ui) else {
        return Ok(0);
    };

    // Classify before asking for a password: a fully protected tree is
    // a no-op and must not prompt.
    let pending = run
        .files
        .iter()
        .filter(|file| {
            std::fs::read_to_string(file)
                .map(|content| !is_protected(&content))
                // Unreadable files stay in the work set so the
                // processing loop reports them as per-file failures.
                .unwrap_or(true)
        })
        .count();

    if pending == 0 {
        ui.info(&format!(
            "All {} documents are already protected; nothing to do.",
            run.files.len()
        ));
        return Ok(0);
    }

    ui.info(&format!(
        "Found {} documents, {} to protect",
        run.files.len(),
        pending
    ));

    let password = acquire_password(args.password.as_deref(), true)?;

    let now = Utc::now();
    let mut summary = RunSummary::default();
    for file in &run.files {
        let result = protect_file(file, &password, now);
        let path = run.display_path(file);
        match &result {
            Ok(FileOutcome::Converted) => ui.status(Badge::Ok, &path, None),
            Ok(_) => ui.status(Badge::Skip, &path, Some("already protected")),
            Err(e) => ui.status(Badge::Fail, &path, Some(&e.to_string())),
        }
        summary.record(&result);
    }

    ui.summary(
        summary.converted,
        summary.skipped,
        summary.failed,
        "already protected",
    );

    Ok(if summary.is_clean() { 0 } else { 1 })
}
