//! # Parley Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Parley CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration (files, then flag/environment overrides)
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! - Each top-level command (`chat`, `ask`, `teach`, `history`) is a variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting (learns answers it does not know)
//! parley chat
//!
//! # Use a specific knowledge base with debug logging
//! parley -vv --knowledge-base ./kb.json ask "what is your name"
//! ```
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod bot; // Matching, knowledge base, history, responders, chat session
mod commands; // Handles specific command logic (chat, ask, teach, history)
mod common; // Shared utilities (fs, ui)
mod core; // Core infrastructure (errors, config)

use crate::core::config::{self, ConfigOverrides};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "parley",
    about = "Parley: a terminal chat assistant that learns answers to the questions you ask it",
    long_about = "Answers questions from a knowledge base using fuzzy matching, learns new\n\
                  answers when it doesn't know one, and keeps a timestamped conversation history.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Read configuration from this file only.
    #[arg(long, global = true, env = "PARLEY_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Knowledge base JSON file.
    #[arg(long, global = true, env = "PARLEY_KNOWLEDGE_BASE", value_name = "PATH")]
    knowledge_base: Option<PathBuf>,

    /// Conversation history JSON file.
    #[arg(long, global = true, env = "PARLEY_HISTORY_FILE", value_name = "PATH")]
    history_file: Option<PathBuf>,

    /// Intents JSON file used by `chat --mode intent`.
    #[arg(long, global = true, env = "PARLEY_INTENTS_FILE", value_name = "PATH")]
    intents_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_file: self.config.clone(),
            knowledge_base: self.knowledge_base.clone(),
            history_file: self.history_file.clone(),
            intents_file: self.intents_file.clone(),
        }
    }
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    #[command(alias = "t")]
    Teach(commands::teach::TeachArgs),
    #[command(alias = "h")]
    History(commands::history::HistoryArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = config::load_config(&cli.overrides()).and_then(|cfg| match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args, &cfg),
        Commands::Ask(args) => commands::ask::handle_ask(args, &cfg),
        Commands::Teach(args) => commands::teach::handle_teach(args, &cfg),
        Commands::History(args) => commands::history::handle_history(args, &cfg),
    });

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
