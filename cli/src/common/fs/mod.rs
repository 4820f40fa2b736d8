//! # Parley Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers shared by the knowledge base and conversation history
//! stores. Everything currently lives in the `io` submodule; import from it
//! directly (e.g. `crate::common::fs::io::write_json`).
//!

/// Basic file I/O: directories, text files and JSON documents.
pub mod io;
