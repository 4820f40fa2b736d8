//! # Parley Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used across Parley that are not tied to a particular
//! command or reply strategy.
//!
//! - **`fs`**: Filesystem operations: directory creation, atomic file writes,
//!   JSON read/write.
//! - **`ui`**: Terminal line I/O for the interactive chat surface: prompts,
//!   reading a line, printing speaker-prefixed messages.
//!

/// Utilities for filesystem operations (directories, atomic writes, JSON).
pub mod fs;
/// Utilities for terminal line input and speaker-prefixed output.
pub mod ui;
