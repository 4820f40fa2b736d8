//! # Parley UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! The terminal is Parley's only presentation surface. This module holds the
//! small pieces of line-oriented I/O the chat session is built from. They
//! work over any `BufRead`/`Write` pair so the session can be driven from
//! stdin/stdout in the binary and from in-memory buffers in tests.
//!
//! - **`prompt`**: Writing a prompt, reading one line, printing
//!   `Speaker: message` lines.
//!

pub mod prompt;
