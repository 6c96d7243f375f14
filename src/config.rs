use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{Error, Result};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub page: PageConfig,
    pub labels: LabelsConfig,
    pub transcript: TranscriptConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub paper: String,
    pub numbers: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            paper: "a4".to_string(),
            numbers: true,
        }
    }
}

/// Names printed above each message of a transcript.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LabelsConfig {
    pub user: String,
    pub assistant: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            user: "You".to_string(),
            assistant: "Coach".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TranscriptConfig {
    /// Shown in place of an empty conversation.
    pub welcome: String,
    /// Assistant reply recorded when a chat request fails.
    pub error_reply: String,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            welcome: "Hi! I'm your AI fitness trainer. Ask me anything about workouts, \
                      nutrition, or fitness goals!"
                .to_string(),
            error_reply: "Sorry, I encountered an error. Please try again.".to_string(),
        }
    }
}

impl Config {
    /// The settings shipped in `default_config.toml`.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("default_config.toml is validated by build.rs")
    }

    /// Load config from a TOML file layered over the compiled defaults.
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::compiled_default());
            }
            Err(source) => {
                return Err(Error::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Self::from_toml(&content).map_err(|source| {
            warn!(path = %path.display(), "rejecting config file");
            Error::Config {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// Parse `content`, taking any key it leaves out from the compiled defaults.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        let mut merged: toml::Table =
            toml::from_str(DEFAULT_CONFIG).expect("default_config.toml is validated by build.rs");
        let overrides: toml::Table = toml::from_str(content)?;

        for (section, value) in overrides {
            if let toml::Value::Table(keys) = &value {
                if let Some(toml::Value::Table(base)) = merged.get_mut(&section) {
                    for (key, value) in keys {
                        base.insert(key.clone(), value.clone());
                    }
                    continue;
                }
            }
            merged.insert(section, value);
        }

        toml::Value::Table(merged).try_into()
    }
}
