//! # Askpdf Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for askpdf, handling
//! loading, validation, and access to configuration data. Configuration is
//! optional: with no config file present the application runs entirely on
//! built-in defaults (the original fourteen-entry topic table and a 50 ms
//! inter-word delay).
//!
//! ## Architecture
//!
//! Configuration sources, first found wins:
//! 1. Project-specific `.askpdf.toml` in the current directory or an ancestor
//! 2. User-specific `~/.config/askpdf/config.toml`
//! 3. Default values defined in the code
//!
//! A custom topic table can be supplied either inline (`[[topics]]` entries)
//! or via `responder.topics_file`, a path (with `~` expansion) to a TOML file
//! containing only `[[topics]]` entries. The file form takes precedence over
//! the inline form; either replaces the built-in table entirely.
//!
//! ## Examples
//!
//! ```toml
//! # .askpdf.toml
//! [responder]
//! delay_ms = 25
//!
//! [[topics]]
//! keyword = "range"
//! answer = "About 530 km on a full charge."
//! ```
//!
//! The configuration is loaded once per command execution and passed to the
//! modules that need it.
//!
use crate::core::error::{AskpdfError, Result};
use crate::responder::table::{TopicEntry, TopicTable};
use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// File name searched for in the current directory and its ancestors.
pub const PROJECT_CONFIG_FILENAME: &str = ".askpdf.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub responder: ResponderConfig,
    /// Inline custom topic table. When non-empty it replaces the built-in table.
    #[serde(default)]
    pub topics: Vec<TopicEntry>,
}

/// Configuration for answer selection and emission.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ResponderConfig {
    /// Inter-word delay in milliseconds during answer emission.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Optional path to a TOML file of `[[topics]]` entries (can use ~). Will be expanded.
    #[serde(default)]
    pub topics_file: Option<String>,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            topics_file: None,
        }
    }
}

fn default_delay_ms() -> u64 {
    50
}

/// Layout of a standalone topics file referenced by `responder.topics_file`.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct TopicsFile {
    #[serde(default)]
    topics: Vec<TopicEntry>,
}

impl Config {
    /// Resolves the active topic table for this configuration.
    ///
    /// Precedence: `responder.topics_file` if set, else inline `[[topics]]`
    /// if non-empty, else the built-in table. Custom tables are validated
    /// (non-empty, distinct keywords after lowercasing).
    pub fn topic_table(&self) -> Result<TopicTable> {
        if let Some(raw_path) = &self.responder.topics_file {
            let expanded = shellexpand::tilde(raw_path).into_owned();
            let path = PathBuf::from(expanded);
            debug!("Loading topic table from file: {}", path.display());
            let content = fs::read_to_string(&path).with_context(|| {
                format!("Failed to read topics file '{}'", path.display())
            })?;
            let file: TopicsFile = toml::from_str(&content).map_err(|e| {
                AskpdfError::Config(format!("invalid TOML in '{}': {}", path.display(), e))
            })?;
            if file.topics.is_empty() {
                return Err(AskpdfError::Config(format!(
                    "topics file '{}' defines no [[topics]] entries",
                    path.display()
                )))?;
            }
            return TopicTable::from_entries(file.topics);
        }

        if !self.topics.is_empty() {
            debug!("Using inline topic table ({} entries)", self.topics.len());
            return TopicTable::from_entries(self.topics.clone());
        }

        Ok(TopicTable::builtin())
    }
}

/// # Load Configuration (`load_config`)
///
/// Locates and parses the active configuration file, falling back to
/// built-in defaults when none exists.
///
/// ## Lookup order
/// 1. `.askpdf.toml` in the current directory or the nearest ancestor.
/// 2. The user configuration file (`~/.config/askpdf/config.toml` on Linux,
///    the platform equivalent elsewhere, via `directories::ProjectDirs`).
/// 3. `Config::default()`.
///
/// ## Returns
///
/// * `Result<Config>`: The parsed configuration, or an `Err` if a file was
///   found but could not be read or contained invalid TOML. A missing file
///   is not an error.
pub fn load_config() -> Result<Config> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;

    if let Some(path) = find_project_config(&cwd) {
        debug!("Loading project configuration from {}", path.display());
        return parse_config_file(&path);
    }

    if let Some(path) = user_config_path() {
        if path.is_file() {
            debug!("Loading user configuration from {}", path.display());
            return parse_config_file(&path);
        }
    }

    debug!("No configuration file found; using built-in defaults");
    Ok(Config::default())
}

/// Searches `start_dir` and its ancestors for a project config file.
fn find_project_config(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join(PROJECT_CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}

/// Returns the platform-specific user config file path, if determinable.
fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "askpdf").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Reads and parses one configuration file.
fn parse_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    let cfg: Config = toml::from_str(&content).map_err(|e| {
        AskpdfError::Config(format!("invalid TOML in '{}': {}", path.display(), e))
    })?;
    Ok(cfg)
}
