//! Configuration management for har2case test generation.
//!
//! This module defines the `Config` struct describing one generation run. The
//! configuration can be created programmatically or loaded from a YAML or TOML
//! file, chosen by the file extension.
//!
//! # Examples
//!
//! ```no_run
//! use har2case_core::config::Config;
//! use har2case_core::templates::EntryMode;
//!
//! # #[tokio::main]
//! # async fn main() -> har2case_core::Result<()> {
//! // Create a new config programmatically
//! let mut config = Config::new("captures/login.har");
//! config.entry_mode = EntryMode::All;
//!
//! // Or load from a config file
//! let config = Config::from_file("har2case.yaml").await?;
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

use crate::templates::{EntryMode, TemplateKind};

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Configuration for a har2case run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the HAR capture
    pub har_path: String,

    /// Where to write the test case; defaults to a sibling of the HAR file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,

    /// Template to use for code generation
    #[serde(default)]
    pub template_kind: TemplateKind,

    /// Template file used by the custom template kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_path: Option<String>,

    /// Which entries are rendered
    #[serde(default)]
    pub entry_mode: EntryMode,
}

impl Config {
    /// Create a new Config with default values
    pub fn new(har_path: impl Into<String>) -> Self {
        Self {
            har_path: har_path.into(),
            output_path: None,
            template_kind: TemplateKind::default(),
            template_path: None,
            entry_mode: EntryMode::default(),
        }
    }

    /// Load configuration from a file (`.toml` as TOML, anything else as YAML)
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let config = if is_toml(path) {
            toml::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let content = if is_toml(path) {
            toml::to_string(self)?
        } else {
            serde_yaml::to_string(self)?
        };
        fs::write(path, content).await?;
        Ok(())
    }

    /// Template file as a path, if configured
    pub fn template_path(&self) -> Option<PathBuf> {
        self.template_path.as_ref().map(PathBuf::from)
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_roundtrip_yaml() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("config.yaml");

        let config = Config::new("demo.har");
        config.save(&file_path).await?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.har_path, "demo.har");
        assert_eq!(loaded.output_path, None);
        assert_eq!(loaded.template_kind, TemplateKind::Seldom);
        assert_eq!(loaded.entry_mode, EntryMode::Last);

        Ok(())
    }

    #[tokio::test]
    async fn test_config_roundtrip_toml() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("config.toml");

        let mut config = Config::new("captures/demo.har");
        config.output_path = Some("out/test_demo.py".to_string());
        config.template_kind = TemplateKind::Custom;
        config.template_path = Some("templates/case.py.tera".to_string());
        config.entry_mode = EntryMode::All;
        config.save(&file_path).await?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.template_path(),
            Some(PathBuf::from("templates/case.py.tera"))
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_config_defaults_from_yaml() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("har2case.yml");
        std::fs::write(&file_path, "har_path: a.har\nentry_mode: all\n")?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded.har_path, "a.har");
        assert_eq!(loaded.entry_mode, EntryMode::All);
        assert_eq!(loaded.template_kind, TemplateKind::Seldom);
        assert_eq!(loaded.template_path, None);

        Ok(())
    }
}
