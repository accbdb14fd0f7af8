//! Shared run preparation: configuration loading and document discovery.
//!
//! Covers the phases both commands share before any password is asked
//! for. Every early exit here is a success: disabled protection, no
//! configured folders, and an empty scan all report and return nothing
//! to process.

use std::path::{Path, PathBuf};

use pagelock_core::config::{read_config, ProtectionConfig};
use pagelock_core::scan_markdown_files;

use crate::cli::Cli;
use crate::ui::UiContext;

/// A run that made it past configuration and scanning.
pub struct PreparedRun {
    pub root: PathBuf,
    pub files: Vec<PathBuf>,
}

impl PreparedRun {
    /// Root-relative display form of a document path.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// Load configuration and scan the protected folders.
///
/// Returns `None` when there is nothing to process; the reason has
/// already been reported and the run should exit 0.
pub fn prepare_run(cli: &Cli, ui: &UiContext) -> Option<PreparedRun> {
    let config_path = cli.root.join(&cli.config);
    let config = match read_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            // Unreadable configuration degrades to disabled, it never
            // aborts the build pipeline.
            ui.warn(&format!("{} (using disabled defaults)", e));
            ProtectionConfig::disabled_default()
        }
    };

    if !config.enabled {
        ui.warn("Content protection is disabled; nothing to do.");
        ui.warn(&format!(
            "Enable it with `encryption.enabled: true` in {}",
            config_path.display()
        ));
        return None;
    }

    if config.protected_folders.is_empty() {
        ui.warn("No protected folders configured; nothing to do.");
        return None;
    }

    ui.info(&format!(
        "Protected folders: {}",
        config.protected_folders.join(", ")
    ));

    let roots: Vec<PathBuf> = config
        .protected_folders
        .iter()
        .map(|folder| cli.root.join(folder))
        .collect();
    let files = scan_markdown_files(&roots);

    if files.is_empty() {
        ui.info("No markdown documents found under the protected folders.");
        return None;
    }

    Some(PreparedRun {
        root: cli.root.clone(),
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_path_is_root_relative() {
        let run = PreparedRun {
            root: PathBuf::from("/site"),
            files: vec![],
        };
        assert_eq!(
            run.display_path(Path::new("/site/content/protected/a.md")),
            "content/protected/a.md"
        );
    }

    #[test]
    fn test_display_path_outside_root_kept_absolute() {
        let run = PreparedRun {
            root: PathBuf::from("/site"),
            files: vec![],
        };
        assert_eq!(
            run.display_path(Path::new("/elsewhere/a.md")),
            "/elsewhere/a.md"
        );
    }
}
