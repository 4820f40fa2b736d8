//! # Parley Conversation History
//!
//! File: cli/src/bot/history.rs
//!
//! ## Overview
//!
//! Every chat session is recorded as a conversation: an ordered list of
//! timestamped turns keyed by a conversation id. All conversations share one
//! JSON file:
//!
//! ```json
//! {
//!   "20240512093015": [
//!     { "speaker": "user", "message": "hello", "timestamp": "2024-05-12 09:30:18" },
//!     { "speaker": "bot", "message": "Hello there!", "timestamp": "2024-05-12 09:30:18" }
//!   ]
//! }
//! ```
//!
//! Conversation ids are the local start time (`%Y%m%d%H%M%S`), so they sort
//! chronologically. The file is rewritten after every recorded turn.
//!
use crate::common::fs::io;
use crate::core::error::Result;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Format of conversation ids.
pub const CONVERSATION_ID_FORMAT: &str = "%Y%m%d%H%M%S";
/// Format of turn timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Who produced a turn.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    #[default]
    User,
    Bot,
}

/// One recorded message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    #[serde(default)]
    pub speaker: Speaker,
    pub message: String,
    pub timestamp: String,
}

pub type Conversations = BTreeMap<String, Vec<Turn>>;

/// The history file plus the conversation currently being recorded.
#[derive(Debug)]
pub struct HistoryLog {
    path: PathBuf,
    conversations: Conversations,
    current: String,
}

impl HistoryLog {
    /// Loads `path` (missing file → no conversations) and starts a new
    /// conversation stamped with the current local time.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut log = Self::load(path)?;
        let id = log.next_conversation_id(Local::now().naive_local());
        log.start_conversation(id);
        Ok(log)
    }

    /// Loads `path` without starting a conversation.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let conversations = io::read_json::<Conversations>(&path)?.unwrap_or_default();
        debug!(
            "Loaded {} conversation(s) from {}",
            conversations.len(),
            path.display()
        );
        Ok(Self {
            path,
            conversations,
            current: String::new(),
        })
    }

    /// Id for a conversation starting at `now`, unique within this log.
    pub fn next_conversation_id(&self, now: NaiveDateTime) -> String {
        let base = now.format(CONVERSATION_ID_FORMAT).to_string();
        if !self.conversations.contains_key(&base) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}-{}", base, n);
            if !self.conversations.contains_key(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Makes `id` the current conversation, creating it if needed.
    pub fn start_conversation(&mut self, id: String) {
        info!("Recording conversation {}", id);
        self.conversations.entry(id.clone()).or_default();
        self.current = id;
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn current_id(&self) -> &str {
        &self.current
    }

    pub fn current_turns(&self) -> &[Turn] {
        self.conversation(&self.current).unwrap_or(&[])
    }

    pub fn conversation(&self, id: &str) -> Option<&[Turn]> {
        self.conversations.get(id).map(Vec::as_slice)
    }

    pub fn conversations(&self) -> &Conversations {
        &self.conversations
    }

    /// Appends a turn timestamped now and writes the file.
    pub fn record(&mut self, speaker: Speaker, message: &str) -> Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.record_at(speaker, message, timestamp)
    }

    fn record_at(&mut self, speaker: Speaker, message: &str, timestamp: String) -> Result<()> {
        self.conversations
            .entry(self.current.clone())
            .or_default()
            .push(Turn {
                speaker,
                message: message.to_string(),
                timestamp,
            });
        io::write_json(&self.path, &self.conversations)
    }
}
