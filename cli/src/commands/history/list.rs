//! # Parley History List
//!
//! File: cli/src/commands/history/list.rs
//!
//! Prints one line per recorded conversation: id, turn count, and the
//! timestamp of its first turn.
//!
use crate::bot::history::{HistoryLog, Turn};
use crate::core::config::Config;
use crate::core::error::Result;
use clap::Parser;

/// # List Arguments (`ListArgs`)
#[derive(Parser, Debug)]
pub struct ListArgs {}

/// # Handle History List (`handle_list`)
pub fn handle_list(_args: ListArgs, config: &Config) -> Result<()> {
    let log = HistoryLog::load(&config.history.path)?;
    let conversations = log.conversations();
    if conversations.is_empty() {
        println!("No conversations recorded yet.");
        return Ok(());
    }
    println!("Conversations in {}:", log.path().display());
    for (id, turns) in conversations {
        println!("{}", summary_line(id, turns));
    }
    Ok(())
}

fn summary_line(id: &str, turns: &[Turn]) -> String {
    match turns.first() {
        Some(first) => format!("  {}  {} turn(s)  started {}", id, turns.len(), first.timestamp),
        None => format!("  {}  0 turn(s)", id),
    }
}
