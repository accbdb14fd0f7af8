//! Protected-content configuration.
//!
//! The site configuration is a YAML resource with an `encryption`
//! section:
//!
//! ```yaml
//! encryption:
//!   enabled: true
//!   protectedFolders:
//!     - content/protected
//!     - content/private
//! ```
//!
//! Policy: a missing or unreadable configuration degrades to disabled
//! defaults rather than failing the run. That fallback is deliberate,
//! not an accident of partial parsing; callers that want to report the
//! underlying problem use [`read_config`] and apply
//! [`ProtectionConfig::disabled_default`] themselves.

use std::path::Path;

use serde::Deserialize;

use crate::error::{PagelockError, Result};

/// Folder used when the configuration names none.
pub const DEFAULT_PROTECTED_FOLDER: &str = "content/protected";

/// Typed protection settings consumed by the batch workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectionConfig {
    /// Whether content protection is enabled at all.
    pub enabled: bool,
    /// Root-relative folders whose documents participate in protection.
    pub protected_folders: Vec<String>,
}

impl ProtectionConfig {
    /// The fallback applied when configuration cannot be read or parsed.
    pub fn disabled_default() -> Self {
        Self {
            enabled: false,
            protected_folders: vec![DEFAULT_PROTECTED_FOLDER.to_string()],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    encryption: RawEncryptionSection,
}

#[derive(Debug, Default, Deserialize)]
struct RawEncryptionSection {
    #[serde(default)]
    enabled: bool,
    #[serde(default, rename = "protectedFolders")]
    protected_folders: Option<Vec<String>>,
}

/// Read and parse the configuration file, surfacing failures.
///
/// # Errors
///
/// Returns `PagelockError::Config` when the file cannot be read or is
/// not valid YAML. Unknown sections and fields are ignored; a missing
/// `encryption` section yields disabled settings with the default
/// folder.
pub fn read_config(path: &Path) -> Result<ProtectionConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        PagelockError::Config(format!("failed to read {}: {}", path.display(), e))
    })?;

    let raw: RawConfig = serde_yaml::from_str(&contents).map_err(|e| {
        PagelockError::Config(format!("failed to parse {}: {}", path.display(), e))
    })?;

    let protected_folders = raw
        .encryption
        .protected_folders
        .unwrap_or_else(|| vec![DEFAULT_PROTECTED_FOLDER.to_string()]);

    Ok(ProtectionConfig {
        enabled: raw.encryption.enabled,
        protected_folders,
    })
}

/// Load configuration with the degrade-to-disabled policy applied.
pub fn load_config(path: &Path) -> ProtectionConfig {
    read_config(path).unwrap_or_else(|_| ProtectionConfig::disabled_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            "site:\n  title: Example\nencryption:\n  enabled: true\n  protectedFolders:\n    - content/protected\n    - content/private\n",
        );

        let config = read_config(file.path()).unwrap();
        assert!(config.enabled);
        assert_eq!(
            config.protected_folders,
            vec!["content/protected", "content/private"]
        );
    }

    #[test]
    fn test_missing_encryption_section_disabled() {
        let file = write_config("site:\n  title: Example\n");

        let config = read_config(file.path()).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.protected_folders, vec![DEFAULT_PROTECTED_FOLDER]);
    }

    #[test]
    fn test_enabled_without_folders_uses_default() {
        let file = write_config("encryption:\n  enabled: true\n");

        let config = read_config(file.path()).unwrap();
        assert!(config.enabled);
        assert_eq!(config.protected_folders, vec![DEFAULT_PROTECTED_FOLDER]);
    }

    #[test]
    fn test_explicit_empty_folder_list_kept() {
        let file = write_config("encryption:\n  enabled: true\n  protectedFolders: []\n");

        let config = read_config(file.path()).unwrap();
        assert!(config.protected_folders.is_empty());
    }

    #[test]
    fn test_missing_file_errors() {
        let result = read_config(Path::new("/nonexistent/config.yml"));
        assert!(matches!(result, Err(PagelockError::Config(_))));
    }

    #[test]
    fn test_malformed_yaml_errors() {
        let file = write_config("encryption: [not: valid: yaml\n");
        let result = read_config(file.path());
        assert!(matches!(result, Err(PagelockError::Config(_))));
    }

    #[test]
    fn test_load_config_falls_back_to_disabled() {
        let config = load_config(Path::new("/nonexistent/config.yml"));
        assert_eq!(config, ProtectionConfig::disabled_default());
        assert!(!config.enabled);
    }
}
