//! Configuration loading and parsing.
//!
//! Parses `oxline.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [prompt]
//! text = "> "
//!
//! [history]
//! max_entries = 1000
//! ignore_consecutive_duplicates = false
//!
//! [terminal]
//! fallback_columns = 80
//!
//! [completion]
//! enabled = true
//! ```
//!
//! Every field is optional. A missing file yields defaults; a file that fails
//! to parse also yields defaults, with a `warn!` on the `config` target so the
//! session still starts. Unknown fields are ignored.

use anyhow::Result;
use core_state::{HistoryOptions, HistoryStore};
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

const FILE_NAME: &str = "oxline.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    #[serde(default = "PromptConfig::default_text")]
    pub text: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            text: Self::default_text(),
        }
    }
}

impl PromptConfig {
    fn default_text() -> String {
        "> ".to_string()
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    #[serde(default)]
    pub max_entries: Option<usize>,
    #[serde(default)]
    pub ignore_consecutive_duplicates: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct TerminalConfig {
    #[serde(default = "TerminalConfig::default_fallback_columns")]
    pub fallback_columns: u16,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            fallback_columns: Self::default_fallback_columns(),
        }
    }
}

impl TerminalConfig {
    const fn default_fallback_columns() -> u16 {
        80
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CompletionConfig {
    #[serde(default = "CompletionConfig::default_enabled")]
    pub enabled: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
        }
    }
}

impl CompletionConfig {
    const fn default_enabled() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub prompt: PromptConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub terminal: TerminalConfig,
    #[serde(default)]
    pub completion: CompletionConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // file contents as read (optional)
    pub file: ConfigFile,    // parsed (or default) data
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("oxline").join(FILE_NAME);
    }
    PathBuf::from(FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        info!(target: "config", path = %path.display(), "config_file_absent_using_defaults");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                raw: Some(content),
                file,
            })
        }
        Err(err) => {
            warn!(
                target: "config",
                path = %path.display(),
                error = %err,
                "config_parse_failed_using_defaults"
            );
            Ok(Config::default())
        }
    }
}

impl Config {
    pub fn history_options(&self) -> HistoryOptions {
        HistoryOptions {
            max_entries: self.file.history.max_entries,
            ignore_consecutive_duplicates: self.file.history.ignore_consecutive_duplicates,
        }
    }

    /// Empty history store carrying the configured retention policies.
    pub fn history_store(&self) -> HistoryStore {
        HistoryStore::with_options(self.history_options())
    }

    pub fn prompt_text(&self) -> &str {
        &self.file.prompt.text
    }

    /// Never zero, so hint layout always has a usable width.
    pub fn fallback_columns(&self) -> u16 {
        self.file.terminal.fallback_columns.max(1)
    }

    pub fn completion_enabled(&self) -> bool {
        self.file.completion.enabled
    }
}
