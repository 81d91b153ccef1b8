//! Page configuration.
//!
//! Everything has a built-in default, so a config file is optional and
//! may set any subset of fields.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::disclosure::FaqEntry;

const DEFAULT_TITLE: &str = "Create your account";

/// Error loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("FAQ entry {index} has an empty question")]
    EmptyQuestion { index: usize },
}

/// Content and storage settings for the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Title bar text.
    pub title: String,
    /// FAQ entries, in display order.
    pub faq: Vec<FaqEntry>,
    /// Preferences file. None = platform default.
    pub store_path: Option<PathBuf>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            faq: default_faq(),
            store_path: None,
        }
    }
}

fn default_faq() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "Why do I need an account?",
            "An account lets you save your progress and pick up where you left off.",
        ),
        FaqEntry::new(
            "What are the password requirements?",
            "Passwords must be at least 6 characters long. Spaces count.",
        ),
        FaqEntry::new(
            "Is my theme choice remembered?",
            "Yes. The light/dark preference is saved locally and restored on next launch.",
        ),
    ]
}

impl PageConfig {
    /// Reject entries that would render as blank rows.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.faq.iter().position(|e| e.question.trim().is_empty()) {
            Some(index) => Err(ConfigError::EmptyQuestion { index }),
            None => Ok(()),
        }
    }
}

/// Parse config from a JSON string.
pub fn parse_config(contents: &str, path: &Path) -> Result<PageConfig, ConfigError> {
    let config: PageConfig =
        serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}

/// Load config from disk.
pub fn load_config(path: &Path) -> Result<PageConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents, path)
}
