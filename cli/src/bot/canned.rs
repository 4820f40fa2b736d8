//! # Parley Canned Responder
//!
//! File: cli/src/bot/canned.rs
//!
//! Placeholder reply strategy with a fixed dictionary of replies, looked up
//! by the lowercased message.
//!
use crate::bot::intent::FALLBACK_REPLY;
use crate::bot::responder::{Reply, Responder};
use crate::core::error::Result;
use std::collections::HashMap;

/// Replies from a hard-coded dictionary.
#[derive(Debug, Clone)]
pub struct CannedResponder {
    responses: HashMap<&'static str, &'static str>,
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self {
            responses: HashMap::from([("hello", "Hello there!"), ("how are you", "Good enough")]),
        }
    }
}

impl CannedResponder {
    pub fn reply_for(&self, message: &str) -> &'static str {
        self.responses
            .get(message.trim().to_lowercase().as_str())
            .copied()
            .unwrap_or(FALLBACK_REPLY)
    }
}

impl Responder for CannedResponder {
    fn name(&self) -> &'static str {
        "canned"
    }

    fn respond(&mut self, message: &str) -> Result<Reply> {
        Ok(Reply::Answer {
            query: message.to_string(),
            text: self.reply_for(message).to_string(),
            matched: None,
        })
    }
}
