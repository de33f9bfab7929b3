//! Plugin configuration
//!
//! Options can come from a YAML file (by default `~/.config/jira-issue-link/config.yml`)
//! and are then overridden field by field from the command line or environment.
//!
//! ```yaml
//! key: ABC
//! url: https://jira.example.com/browse/
//! emoji: ":ticket:"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// The name of the package, used for config directory naming
const PKG_NAME: &str = "jira-issue-link";

/// Emoji shown in front of the issue link when none is configured
pub const DEFAULT_EMOJI: &str = ":link:";

/// Configuration for the issue key check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// The JIRA project key (e.g. the `ABC` in `ABC-123`)
    pub key: String,
    /// The JIRA issue base URL (e.g. `https://jira.atlassian.com/browse/`)
    pub url: String,
    /// Emoji token rendered in front of the issue link
    pub emoji: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            key: String::new(),
            url: String::new(),
            emoji: DEFAULT_EMOJI.to_string(),
        }
    }
}

impl Options {
    pub fn new(key: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Sets the emoji and returns self for chaining
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    /// Load options from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Load options from the default config file, falling back to defaults
    /// when there is no such file.
    pub fn load_default() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Check that the URL and key are set, in that order.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        if self.key.is_empty() {
            return Err(ConfigError::MissingKey);
        }
        Ok(())
    }
}

/// Get the configuration directory path
///
/// Returns `~/.config/jira-issue-link/`, or `None` when HOME is not set.
pub fn get_config_dir() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".config").join(PKG_NAME))
}

/// Path of the config file read when no `--config` is given
pub fn default_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yml"))
}
