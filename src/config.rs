use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ReleaseError, Result};
use crate::tag::TagPattern;

/// File looked up in the repository root.
pub const PROJECT_CONFIG_FILE: &str = "release.toml";

/// File looked up in the user configuration directory.
pub const USER_CONFIG_FILE: &str = "dist-release.toml";

/// Represents the complete configuration for dist-release.
///
/// Every field has a default, so an empty (or missing) file yields the
/// classic npm layout: release from `master`, build into `dist/`, commit
/// the build on the `dist` branch and push to `origin`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ReleaseConfig {
    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub commands: CommandsConfig,
}

fn default_release_branch() -> String {
    "master".to_string()
}

fn default_dist_branch() -> String {
    "dist".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

/// Branches, remote and tag naming.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_release_branch")]
    pub release_branch: String,

    #[serde(default = "default_dist_branch")]
    pub dist_branch: String,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            release_branch: default_release_branch(),
            dist_branch: default_dist_branch(),
            remote: default_remote(),
            tag_pattern: default_tag_pattern(),
        }
    }
}

fn default_manifest() -> String {
    "package.json".to_string()
}

fn default_build_dir() -> String {
    "dist".to_string()
}

fn default_ignore_file() -> String {
    ".gitignore".to_string()
}

/// Paths relative to the repository root.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PathsConfig {
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Build output directory; also the literal ignore-file entry to strip
    #[serde(default = "default_build_dir")]
    pub build_dir: String,

    #[serde(default = "default_ignore_file")]
    pub ignore_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            manifest: default_manifest(),
            build_dir: default_build_dir(),
            ignore_file: default_ignore_file(),
        }
    }
}

fn default_build_command() -> String {
    "npm run build".to_string()
}

fn default_check_command() -> String {
    "npm run check".to_string()
}

fn default_publish_command() -> String {
    "npm publish".to_string()
}

/// Shell commands for the opaque external steps.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CommandsConfig {
    #[serde(default = "default_build_command")]
    pub build: String,

    #[serde(default = "default_check_command")]
    pub check: String,

    #[serde(default = "default_publish_command")]
    pub publish: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        CommandsConfig {
            build: default_build_command(),
            check: default_check_command(),
            publish: default_publish_command(),
        }
    }
}

impl ReleaseConfig {
    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ReleaseConfig =
            toml::from_str(content).map_err(|e| ReleaseError::config(e.to_string()))?;
        config.tag_pattern().validate()?;
        Ok(config)
    }

    /// Tag naming pattern for this project.
    pub fn tag_pattern(&self) -> TagPattern {
        TagPattern::new(self.git.tag_pattern.as_str())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release.toml` in the repository root
/// 3. `dist-release.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `repo_root` - Working directory of the repository being released
///
/// # Returns
/// * `Ok(ReleaseConfig)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, repo_root: &Path) -> Result<ReleaseConfig> {
    let project_config = repo_root.join(PROJECT_CONFIG_FILE);

    let config_str = if let Some(path) = config_path {
        log::debug!("loading config from {}", path.display());
        fs::read_to_string(path)?
    } else if project_config.exists() {
        log::debug!("loading config from {}", project_config.display());
        fs::read_to_string(project_config)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join(USER_CONFIG_FILE);
        if user_config.exists() {
            log::debug!("loading config from {}", user_config.display());
            fs::read_to_string(user_config)?
        } else {
            log::debug!("no config file found, using defaults");
            return Ok(ReleaseConfig::default());
        }
    } else {
        return Ok(ReleaseConfig::default());
    };

    ReleaseConfig::from_toml(&config_str)
}
