//! # Parley History Show
//!
//! File: cli/src/commands/history/show.rs
//!
//! Prints a conversation as `[timestamp] Speaker: message` lines. Without an
//! id the most recent conversation is shown.
//!
use crate::bot::history::{HistoryLog, Speaker, Turn};
use crate::core::config::Config;
use crate::core::error::{ParleyError, Result};
use clap::Parser;

/// # Show Arguments (`ShowArgs`)
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Conversation id as printed by `parley history list`; defaults to the latest.
    id: Option<String>,
}

/// # Handle History Show (`handle_show`)
pub fn handle_show(args: ShowArgs, config: &Config) -> Result<()> {
    let log = HistoryLog::load(&config.history.path)?;
    let (id, turns) = match args.id {
        Some(id) => {
            let turns = log
                .conversation(&id)
                .ok_or_else(|| ParleyError::ConversationNotFound { id: id.clone() })?;
            (id, turns)
        }
        None => match log.conversations().iter().next_back() {
            Some((id, turns)) => (id.clone(), turns.as_slice()),
            None => {
                println!("No conversations recorded yet.");
                return Ok(());
            }
        },
    };

    println!("Conversation {}", id);
    for turn in turns {
        println!("{}", format_turn(turn, &config.session.bot_name));
    }
    Ok(())
}

fn format_turn(turn: &Turn, bot_name: &str) -> String {
    let speaker = match turn.speaker {
        Speaker::User => "You",
        Speaker::Bot => bot_name,
    };
    format!("[{}] {}: {}", turn.timestamp, speaker, turn.message.trim_end())
}
