//! # Parley Chat Session
//!
//! File: cli/src/bot/session.rs
//!
//! ## Overview
//!
//! The interactive loop behind `parley chat`. Each line the user types is
//! handed to a `Responder`; its reply is printed as `<bot name>: <text>`.
//! When the responder does not know an answer the session asks the user to
//! teach one, and every user line and bot reply is appended to the
//! conversation history when one is attached.
//!
//! ## Flow
//!
//! 1. Print the banner and a `You: ` prompt.
//! 2. Blank lines are ignored; end of input or the exit command ends the session.
//!    Commands are matched without regard to ASCII case.
//! 3. The overwrite command re-teaches the answer of the stored question that
//!    answered the previous message (or that message itself when none did).
//! 4. Anything else is one turn: record, respond, print, maybe teach.
//!
//! The session is generic over its input and output so tests can drive it
//! with in-memory buffers.
//!
use crate::bot::history::{HistoryLog, Speaker};
use crate::bot::responder::{Reply, Responder};
use crate::common::ui::prompt;
use crate::core::config::SessionConfig;
use crate::core::error::Result;
use anyhow::Context;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const USER_PROMPT: &str = "You: ";
const TEACH_PROMPT: &str = "Type the answer to your prompt or type 'skip' to skip: ";
const SKIP_WORD: &str = "skip";

/// Counters reported when a session ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// User messages answered (commands and blank lines excluded).
    pub turns: usize,
    /// Answers taught during the session.
    pub learned: usize,
}

/// An interactive chat over `input` and `output`.
pub struct ChatSession<'a, R, W> {
    responder: &'a mut dyn Responder,
    history: Option<HistoryLog>,
    settings: SessionConfig,
    input: R,
    output: W,
    last_key: Option<String>,
    summary: SessionSummary,
}

impl<'a, R: BufRead, W: Write> ChatSession<'a, R, W> {
    pub fn new(responder: &'a mut dyn Responder, settings: SessionConfig, input: R, output: W) -> Self {
        Self {
            responder,
            history: None,
            settings,
            input,
            output,
            last_key: None,
            summary: SessionSummary::default(),
        }
    }

    /// Records every turn of this session in `history`.
    pub fn with_history(mut self, history: HistoryLog) -> Self {
        self.history = Some(history);
        self
    }

    /// Runs until the exit command or end of input.
    pub fn run(mut self) -> Result<SessionSummary> {
        info!("Starting {} chat session", self.responder.name());
        writeln!(
            self.output,
            "Chat with {}! Type '{}' to quit, '{}' to re-teach the last answer.",
            self.settings.bot_name, self.settings.exit_command, self.settings.overwrite_command
        )
        .context("Failed to write banner")?;

        loop {
            let Some(line) = prompt::ask(&mut self.input, &mut self.output, USER_PROMPT)? else {
                // End of input: finish the prompt line.
                writeln!(self.output).context("Failed to write output")?;
                break;
            };
            let message = line.trim();
            if message.is_empty() {
                continue;
            }
            if message.eq_ignore_ascii_case(&self.settings.exit_command) {
                self.bot_says("Goodbye!")?;
                break;
            }
            if message.eq_ignore_ascii_case(&self.settings.overwrite_command) {
                self.overwrite()?;
                continue;
            }
            self.turn(message)?;
        }

        if let Some(history) = &self.history {
            info!(
                "Conversation {} has {} turn(s) in {}",
                history.current_id(),
                history.current_turns().len(),
                history.path().display()
            );
        }
        Ok(self.summary)
    }

    fn turn(&mut self, message: &str) -> Result<()> {
        self.summary.turns += 1;
        self.record(Speaker::User, message)?;

        let reply = self.responder.respond(message)?;
        debug!("{} responder looked up {:?}", self.responder.name(), reply.query());
        let key = reply.teach_key().to_string();
        match reply {
            Reply::Answer { text, .. } => self.bot_says(&text)?,
            Reply::Unknown { query } => {
                debug!("No known answer for {:?}", query);
                self.bot_says("Sorry, I don't know what to say. Can you teach me?")?;
                self.teach(&query)?;
            }
        }
        self.last_key = Some(key);
        Ok(())
    }

    fn overwrite(&mut self) -> Result<()> {
        match self.last_key.clone() {
            Some(question) => self.teach(&question),
            None => self.bot_says("There is nothing to re-teach yet."),
        }
    }

    /// Asks the user for an answer to `question` and hands it to the responder.
    fn teach(&mut self, question: &str) -> Result<()> {
        let answer = prompt::ask(&mut self.input, &mut self.output, TEACH_PROMPT)?;
        let answer = answer.as_deref().map(str::trim).unwrap_or_default();

        if answer.is_empty() || answer.eq_ignore_ascii_case(SKIP_WORD) {
            return self.bot_says("Okay, I'll skip.");
        }
        match self.responder.learn(question, answer)? {
            Some(_) => {
                self.summary.learned += 1;
                self.bot_says("Thanks, I'll remember that.")
            }
            None => self.bot_says("I can't learn new answers in this mode."),
        }
    }

    fn bot_says(&mut self, text: &str) -> Result<()> {
        prompt::say(&mut self.output, &self.settings.bot_name, text)?;
        self.record(Speaker::Bot, text)
    }

    fn record(&mut self, speaker: Speaker, text: &str) -> Result<()> {
        if let Some(history) = self.history.as_mut() {
            history.record(speaker, text)?;
        }
        Ok(())
    }
}
