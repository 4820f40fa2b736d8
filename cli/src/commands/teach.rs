//! # Parley Teach Command
//!
//! File: cli/src/commands/teach.rs
//!
//! `parley teach` stores an answer without going through a chat session. An
//! existing record with exactly the same question has its answer replaced.
//!
//! ```bash
//! parley teach --question "What is your name?" --answer "I'm Parley."
//! ```
//!
use crate::bot::knowledge::{KnowledgeStore, Learned};
use crate::core::config::Config;
use crate::core::error::Result;
use clap::Parser;
use tracing::debug;

/// # Teach Arguments (`TeachArgs`)
#[derive(Parser, Debug)]
#[command(about = "Add or replace a question/answer pair")]
pub struct TeachArgs {
    /// The question to answer.
    #[arg(short, long)]
    question: String,

    /// The answer to store for it.
    #[arg(short, long)]
    answer: String,
}

/// # Handle Teach Command (`handle_teach`)
pub fn handle_teach(args: TeachArgs, config: &Config) -> Result<()> {
    let mut store = KnowledgeStore::open(&config.knowledge.path)?;
    let question = args.question.trim();
    if let Some(previous) = store.answer_for(question) {
        debug!("Replacing answer {:?} for {:?}", previous, question);
    }
    match store.upsert(question, args.answer.trim())? {
        Learned::Added => println!("Learned a new answer for '{}'.", question),
        Learned::Replaced => println!("Updated the answer for '{}'.", question),
    }
    Ok(())
}
