use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::TagPattern;
use crate::error::{ReleaseError, Result};

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "calver.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".calver.toml";

/// Represents the complete configuration for calver-release.
///
/// Contains the push target, tag naming, collaborator selection and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    #[serde(default)]
    pub dry_run: bool,

    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub publish: PublishConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_tag_pattern() -> String {
    "{version}".to_string()
}

/// Where the latest release tag is read from.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseSource {
    /// `gh release list` on the hosting service
    #[default]
    Gh,
    /// Local tags of the git repository
    Git,
}

/// How the new tag is created and pushed.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PublishBackend {
    /// The `git` command line client
    #[default]
    Cli,
    /// libgit2 through the `git2` crate
    Git2,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ReleaseConfig {
    #[serde(default)]
    pub source: ReleaseSource,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct PublishConfig {
    #[serde(default)]
    pub backend: PublishBackend,
}

/// Configuration for behavior customization.
///
/// Controls runtime behavior of calver-release without affecting tag computation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Start from the current month when no release exists yet
    #[serde(default = "default_true")]
    pub seed_first_release: bool,

    /// Ask before publishing (skipped by `--force`)
    #[serde(default)]
    pub confirm: bool,
}

fn default_true() -> bool {
    true
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            seed_first_release: true,
            confirm: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            branch: default_branch(),
            tag_pattern: default_tag_pattern(),
            dry_run: false,
            release: ReleaseConfig::default(),
            publish: PublishConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Config {
    /// The configured tag pattern
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(self.tag_pattern.clone())
    }
}

/// Parses configuration from TOML text and validates it.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(config_str).map_err(|e| ReleaseError::config(e.to_string()))?;

    config
        .tag_pattern()
        .map_err(|e| ReleaseError::config(e.to_string()))?;

    Ok(config)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `calver.toml` in current directory
/// 3. `.calver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_enums_are_lowercase() {
        let config = parse_config(
            r#"
[release]
source = "git"

[publish]
backend = "git2"
"#,
        )
        .unwrap();
        assert_eq!(config.release.source, ReleaseSource::Git);
        assert_eq!(config.publish.backend, PublishBackend::Git2);
    }

    #[test]
    fn test_unknown_source_rejected() {
        let err = parse_config("[release]\nsource = \"gitlab\"\n").unwrap_err();
        assert!(matches!(err, ReleaseError::Config(_)));
    }

    #[test]
    fn test_pattern_without_placeholder_rejected() {
        let err = parse_config("tag_pattern = \"release\"\n").unwrap_err();
        assert!(err.to_string().contains("{version}"));
    }
}
