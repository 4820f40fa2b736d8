//! # Parley Responder Trait
//!
//! File: cli/src/bot/responder.rs
//!
//! A `Responder` turns one user message into a `Reply`. The chat session only
//! talks to this trait, so any reply strategy (learned answers, intents,
//! canned dictionary) plugs into the same loop.
//!
use crate::bot::knowledge::Learned;
use crate::core::error::Result;

/// Outcome of answering one user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A reply was found for `query`.
    ///
    /// `matched` is the stored question the reply came from, when the
    /// responder answers from stored questions.
    Answer {
        query: String,
        text: String,
        matched: Option<String>,
    },
    /// Nothing known matches `query`; the user may teach an answer.
    Unknown { query: String },
}

impl Reply {
    /// The text the responder actually looked up.
    pub fn query(&self) -> &str {
        match self {
            Reply::Answer { query, .. } | Reply::Unknown { query } => query,
        }
    }

    /// The question a corrected answer belongs under: the stored question
    /// that produced this reply, else the query itself.
    pub fn teach_key(&self) -> &str {
        match self {
            Reply::Answer {
                matched: Some(question),
                ..
            } => question,
            other => other.query(),
        }
    }
}

/// A strategy for replying to user messages.
pub trait Responder {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Produces a reply for `message`.
    fn respond(&mut self, message: &str) -> Result<Reply>;

    /// Stores `answer` for `question`.
    ///
    /// Returns `Ok(None)` when this responder cannot learn.
    fn learn(&mut self, _question: &str, _answer: &str) -> Result<Option<Learned>> {
        Ok(None)
    }
}
