//! # Parley CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests. Every test runs the `parley`
//! binary inside its own temporary directory with an explicit config file and
//! data file overrides, so the user's real knowledge base and history are
//! never touched.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// # Get Parley Command (`parley_cmd`)
///
/// An `assert_cmd::Command` pointing at the compiled `parley` binary.
///
/// ## Panics
/// Panics if the `parley` binary cannot be found via `Command::cargo_bin`.
pub fn parley_cmd() -> Command {
    Command::cargo_bin("parley").expect("Failed to find parley binary for testing")
}

/// An isolated working directory with its own config and data files.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    /// Creates the directory and an empty `parley.toml` in it.
    pub fn new() -> Self {
        Self::with_config("")
    }

    /// Creates the directory with `config` as the contents of `parley.toml`.
    pub fn with_config(config: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("parley.toml"), config).expect("Failed to write config");
        Self { dir }
    }

    pub fn knowledge_path(&self) -> PathBuf {
        self.dir.path().join("knowledge_base.json")
    }

    pub fn history_path(&self) -> PathBuf {
        self.dir.path().join("history.json")
    }

    pub fn intents_path(&self) -> PathBuf {
        self.dir.path().join("intents.json")
    }

    /// Writes `json` as the knowledge base.
    pub fn seed_knowledge(&self, json: &str) {
        fs::write(self.knowledge_path(), json).expect("Failed to write knowledge base");
    }

    /// A `parley` command confined to this environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = parley_cmd();
        cmd.current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .env("PARLEY_CONFIG", self.dir.path().join("parley.toml"))
            .env("PARLEY_KNOWLEDGE_BASE", self.knowledge_path())
            .env("PARLEY_HISTORY_FILE", self.history_path())
            .env("PARLEY_INTENTS_FILE", self.intents_path());
        cmd
    }
}
