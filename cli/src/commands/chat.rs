//! # Parley Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! This module implements `parley chat`, the interactive session. It builds the
//! responder selected with `--mode`, attaches the conversation history unless
//! disabled, and runs the session over stdin/stdout.
//!
//! ## Modes
//!
//! - `learn` (default): answers from the knowledge base, asks to be taught
//!   when it has no answer.
//! - `intent`: classifies each message into an intent from the intents file
//!   and replies with one of that intent's canned responses.
//! - `canned`: a fixed two-entry dictionary.
//!
//! ## Examples
//!
//! ```bash
//! # Learn as you go, with a stricter match threshold
//! parley chat --threshold 0.75
//!
//! # Match on the whole conversation rather than the last line
//! parley chat --conversation
//!
//! # Intent-based replies, without recording history
//! parley chat --mode intent --no-history
//! ```
//!
use crate::bot::canned::CannedResponder;
use crate::bot::history::HistoryLog;
use crate::bot::intent::{load_intents, IntentResponder, PatternClassifier};
use crate::bot::knowledge::KnowledgeStore;
use crate::bot::learning::LearningResponder;
use crate::bot::matcher::FuzzyMatcher;
use crate::bot::responder::Responder;
use crate::bot::session::ChatSession;
use crate::core::config::Config;
use crate::core::error::Result;
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Which reply strategy the session uses.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatMode {
    /// Answer from the knowledge base and learn unknown answers.
    #[default]
    Learn,
    /// Reply with a random response for the predicted intent.
    Intent,
    /// Reply from a fixed dictionary.
    Canned,
}

/// # Chat Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
#[command(about = "Start an interactive chat session")]
pub struct ChatArgs {
    /// Reply strategy.
    #[arg(short, long, value_enum, default_value_t = ChatMode::Learn)]
    mode: ChatMode,

    /// Minimum similarity (learn) or confidence (intent), 0.0 to 1.0.
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Match on every message of the session so far, not just the last one.
    #[arg(long)]
    conversation: bool,

    /// Do not record this session in the history file.
    #[arg(long)]
    no_history: bool,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Builds the responder and history log from `config` and runs the session
/// until the user exits or input ends.
pub fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    debug!("Handling chat command with args: {:?}", args);
    let mut responder = build_responder(&args, config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = ChatSession::new(
        responder.as_mut(),
        config.session.clone(),
        stdin.lock(),
        stdout.lock(),
    );
    if config.history.enabled && !args.no_history {
        session = session.with_history(HistoryLog::open(&config.history.path)?);
    } else {
        debug!("History recording disabled for this session.");
    }

    let summary = session.run()?;
    info!(
        "Chat finished: {} turn(s), {} answer(s) learned",
        summary.turns, summary.learned
    );
    Ok(())
}

fn build_responder(args: &ChatArgs, config: &Config) -> Result<Box<dyn Responder>> {
    let responder: Box<dyn Responder> = match args.mode {
        ChatMode::Learn => {
            let threshold = args.threshold.unwrap_or(config.matching.threshold);
            let matcher = FuzzyMatcher::new(threshold)?
                .case_sensitive(config.matching.case_sensitive);
            let store = KnowledgeStore::open(&config.knowledge.path)?;
            info!(
                "Knowledge base {} holds {} question(s)",
                store.path().display(),
                store.len()
            );
            if store.is_empty() {
                info!("Nothing learned yet; unknown questions will ask for an answer.");
            }
            Box::new(
                LearningResponder::new(store, matcher)
                    .with_conversation(args.conversation || config.matching.use_conversation),
            )
        }
        ChatMode::Intent => {
            let intents = load_intents(Path::new(&config.intents.path))?;
            let threshold = args.threshold.unwrap_or(config.intents.threshold);
            Box::new(IntentResponder::new(
                PatternClassifier::new(&intents),
                &intents,
                threshold,
                StdRng::from_os_rng(),
            )?)
        }
        ChatMode::Canned => Box::new(CannedResponder::default()),
    };
    Ok(responder)
}
