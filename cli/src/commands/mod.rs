//! # Parley Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One module per top-level `parley` command. Each defines its Clap argument
//! struct and a `handle_*` function that receives the parsed arguments and
//! the loaded configuration.
//!
//! ## Commands
//!
//! - `chat`: Interactive session (learn, intent or canned replies)
//! - `ask`: One-shot lookup in the knowledge base
//! - `teach`: Add or replace a question/answer pair
//! - `history`: List and show recorded conversations
//!

/// Single-question lookup (`parley ask`).
pub mod ask;
/// Interactive chat session (`parley chat`).
pub mod chat;
/// Conversation history inspection (`parley history list|show`).
pub mod history;
/// Non-interactive teaching (`parley teach`).
pub mod teach;
