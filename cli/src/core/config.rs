//! # Parley Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements configuration loading, merging, validation, and
//! access for Parley. It decides where the knowledge base, conversation
//! history and intents files live, how strict fuzzy matching is, and how the
//! interactive session behaves.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags and `PARLEY_*` environment variables (`ConfigOverrides`)
//! 2. An explicit file given with `--config` / `PARLEY_CONFIG` (replaces 3 and 4)
//! 3. Project-specific `.parley.toml` in the current directory or ancestors
//! 4. User-specific `<config dir>/parley/config.toml`
//! 5. Default values defined in the code
//!
//! Paths are expanded (`~` to the home directory) and the merged result is
//! validated before use.
//!
//! ## Examples
//!
//! ```toml
//! [knowledge]
//! path = "~/notes/knowledge_base.json"
//!
//! [matching]
//! threshold = 0.7
//! use_conversation = false
//!
//! [history]
//! enabled = true
//! path = "~/notes/history.json"
//!
//! [session]
//! bot_name = "Parley"
//! ```
//!
use crate::common::fs::io;
use crate::core::error::{ParleyError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub intents: IntentsConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Where learned question/answer pairs are stored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeConfig {
    /// Path of the knowledge base JSON file (can use ~). Will be expanded.
    #[serde(default = "default_knowledge_path")]
    pub path: String,
}

/// Fuzzy matching behaviour.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MatchingConfig {
    /// Minimum similarity ratio (0.0 to 1.0) for a known question to match.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Match against every user message of the session so far, not just the latest.
    #[serde(default)]
    pub use_conversation: bool,
    /// Compare text exactly instead of lowercased and whitespace-collapsed.
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Conversation history persistence.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HistoryConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Path of the history JSON file (can use ~). Will be expanded.
    #[serde(default = "default_history_path")]
    pub path: String,
}

/// Intent responder settings (`parley chat --mode intent`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct IntentsConfig {
    /// Path of the intents JSON file (can use ~). Will be expanded.
    #[serde(default = "default_intents_path")]
    pub path: String,
    /// Minimum classifier confidence for an intent to be answered.
    #[serde(default = "default_intent_threshold")]
    pub threshold: f64,
}

/// Interactive session settings.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Name printed in front of every bot reply.
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
    /// Line that ends the session.
    #[serde(default = "default_exit_command")]
    pub exit_command: String,
    /// Line that re-teaches the answer for the previous question.
    #[serde(default = "default_overwrite_command")]
    pub overwrite_command: String,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            path: default_knowledge_path(),
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            use_conversation: false,
            case_sensitive: false,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            path: default_history_path(),
        }
    }
}

impl Default for IntentsConfig {
    fn default() -> Self {
        Self {
            path: default_intents_path(),
            threshold: default_intent_threshold(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            exit_command: default_exit_command(),
            overwrite_command: default_overwrite_command(),
        }
    }
}

/// Values supplied on the command line (or through `PARLEY_*` variables)
/// that take precedence over every configuration file.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub knowledge_base: Option<PathBuf>,
    pub history_file: Option<PathBuf>,
    pub intents_file: Option<PathBuf>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "Parley", "parley")
}

fn default_data_file(name: &str) -> String {
    match project_dirs() {
        Some(dirs) => dirs.data_dir().join(name).to_string_lossy().into_owned(),
        None => name.to_string(),
    }
}

fn default_knowledge_path() -> String {
    default_data_file("knowledge_base.json")
}
fn default_history_path() -> String {
    default_data_file("history.json")
}
fn default_intents_path() -> String {
    default_data_file("intents.json")
}
fn default_threshold() -> f64 {
    0.6
}
fn default_intent_threshold() -> f64 {
    0.5
}
fn default_true() -> bool {
    true
}
fn default_bot_name() -> String {
    "Bot".to_string()
}
fn default_exit_command() -> String {
    "-exit-".to_string()
}
fn default_overwrite_command() -> String {
    "-overwrite-".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".parley.toml";

/// Loads, merges, expands and validates the configuration for this run.
pub fn load_config(overrides: &ConfigOverrides) -> Result<Config> {
    let mut config = match &overrides.config_file {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            if !path.is_file() {
                return Err(anyhow!(ParleyError::Config(format!(
                    "Configuration file '{}' does not exist.",
                    path.display()
                ))));
            }
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    apply_overrides(&mut config, overrides);
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = project_dirs() {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.parley.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.parley.toml`,
/// stopping at the first directory that contains `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let project_config = dir.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if dir.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                dir.display()
            );
            return None;
        }
    }
    None
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = io::read_file_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let pick = |project: String, user: String, default: &String| {
        if &project != default {
            project
        } else {
            user
        }
    };

    let mut merged = Config::default();
    merged.knowledge.path = pick(
        project.knowledge.path,
        user.knowledge.path,
        &defaults.knowledge.path,
    );
    merged.matching.threshold = if project.matching.threshold != defaults.matching.threshold {
        project.matching.threshold
    } else {
        user.matching.threshold
    };
    merged.matching.use_conversation =
        project.matching.use_conversation || user.matching.use_conversation;
    merged.matching.case_sensitive =
        project.matching.case_sensitive || user.matching.case_sensitive;
    merged.history.enabled = project.history.enabled && user.history.enabled;
    merged.history.path = pick(
        project.history.path,
        user.history.path,
        &defaults.history.path,
    );
    merged.intents.path = pick(
        project.intents.path,
        user.intents.path,
        &defaults.intents.path,
    );
    merged.intents.threshold = if project.intents.threshold != defaults.intents.threshold {
        project.intents.threshold
    } else {
        user.intents.threshold
    };
    merged.session.bot_name = pick(
        project.session.bot_name,
        user.session.bot_name,
        &defaults.session.bot_name,
    );
    merged.session.exit_command = pick(
        project.session.exit_command,
        user.session.exit_command,
        &defaults.session.exit_command,
    );
    merged.session.overwrite_command = pick(
        project.session.overwrite_command,
        user.session.overwrite_command,
        &defaults.session.overwrite_command,
    );
    merged
}

fn apply_overrides(config: &mut Config, overrides: &ConfigOverrides) {
    if let Some(path) = &overrides.knowledge_base {
        debug!("Knowledge base overridden: {}", path.display());
        config.knowledge.path = path.to_string_lossy().into_owned();
    }
    if let Some(path) = &overrides.history_file {
        debug!("History file overridden: {}", path.display());
        config.history.path = path.to_string_lossy().into_owned();
    }
    if let Some(path) = &overrides.intents_file {
        debug!("Intents file overridden: {}", path.display());
        config.intents.path = path.to_string_lossy().into_owned();
    }
}

fn expand_config_paths(config: &mut Config) {
    for path in [
        &mut config.knowledge.path,
        &mut config.history.path,
        &mut config.intents.path,
    ] {
        *path = shellexpand::tilde(path.as_str()).into_owned();
    }
    debug!(
        "Expanded paths: knowledge={}, history={}, intents={}",
        config.knowledge.path, config.history.path, config.intents.path
    );
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    for (name, value) in [
        ("matching.threshold", config.matching.threshold),
        ("intents.threshold", config.intents.threshold),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(anyhow!(ParleyError::Config(format!(
                "{} must be between 0.0 and 1.0, got {}.",
                name, value
            ))));
        }
    }
    if config.knowledge.path.trim().is_empty() {
        return Err(anyhow!(ParleyError::Config(
            "knowledge.path cannot be empty.".to_string()
        )));
    }
    if Path::new(&config.knowledge.path).is_dir() {
        return Err(anyhow!(ParleyError::Config(format!(
            "Knowledge base path '{}' is a directory, expected a file.",
            config.knowledge.path
        ))));
    }
    if config.session.exit_command.trim().is_empty() {
        return Err(anyhow!(ParleyError::Config(
            "session.exit_command cannot be empty.".to_string()
        )));
    }
    if config.session.exit_command == config.session.overwrite_command {
        return Err(anyhow!(ParleyError::Config(
            "session.exit_command and session.overwrite_command must differ.".to_string()
        )));
    }
    debug!("Configuration validation successful.");
    Ok(())
}
