//! # Parley History Command Group
//!
//! File: cli/src/commands/history/mod.rs
//!
//! ## Overview
//!
//! Router for `parley history`. Subcommands read the conversation history
//! file written by `parley chat`:
//!
//! - `list`: every recorded conversation with its turn count.
//! - `show`: the turns of one conversation (the latest when no id is given).
//!
//! ```bash
//! parley history list
//! parley history show 20240512093015
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// Contains the handler and arguments for `parley history list`.
mod list;
/// Contains the handler and arguments for `parley history show`.
mod show;

/// # History Command Group Arguments (`HistoryArgs`)
#[derive(Parser, Debug)]
#[command(about = "Inspect recorded conversations")]
pub struct HistoryArgs {
    #[command(subcommand)]
    command: HistoryCommand,
}

#[derive(Subcommand, Debug)]
enum HistoryCommand {
    /// List recorded conversations.
    List(list::ListArgs),
    /// Print the turns of a conversation.
    Show(show::ShowArgs),
}

/// # Handle History Command (`handle_history`)
///
/// Dispatches to the selected subcommand handler.
pub fn handle_history(args: HistoryArgs, config: &Config) -> Result<()> {
    match args.command {
        HistoryCommand::List(args) => list::handle_list(args, config),
        HistoryCommand::Show(args) => show::handle_show(args, config),
    }
}
