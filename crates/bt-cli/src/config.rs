//! Configuration loading and management.

use std::path::{Path, PathBuf};

use bt_core::{CalculatorConfig, MalformedPolicy, WorkType};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Work type used when `--work-type` is not given.
    pub work_type: WorkType,

    /// Handling of lines that are not valid punches.
    pub on_malformed: MalformedPolicy,
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (BT_*)
        figment = figment.merge(Env::prefixed("BT_"));

        figment.extract()
    }

    /// Calculator settings derived from this configuration.
    pub fn calculator(&self) -> CalculatorConfig {
        CalculatorConfig {
            on_malformed: self.on_malformed,
        }
    }
}

/// Returns the platform-specific config directory for bt.
///
/// On Linux: `~/.config/bt`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("bt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_config_path_ends_with_bt() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "bt");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.work_type, WorkType::FullDay);
        assert_eq!(config.on_malformed, MalformedPolicy::Reject);
        assert_eq!(
            config.calculator().on_malformed,
            MalformedPolicy::Reject
        );
    }

    #[test]
    fn test_load_from_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("bt.toml");
        std::fs::write(&path, "work_type = \"qlop\"\non_malformed = \"skip\"\n").unwrap();

        let config = Config::load_from(Some(path.as_path())).unwrap();
        assert_eq!(config.work_type, WorkType::Qlop);
        assert_eq!(config.calculator().on_malformed, MalformedPolicy::Skip);
    }

    #[test]
    fn test_load_rejects_unknown_work_type() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("bt.toml");
        std::fs::write(&path, "work_type = \"overtime\"\n").unwrap();

        assert!(Config::load_from(Some(path.as_path())).is_err());
    }
}
