//! # Parley Learning Responder
//!
//! File: cli/src/bot/learning.rs
//!
//! ## Overview
//!
//! The main reply strategy: look the user's message up in the knowledge base
//! with fuzzy matching and return the stored answer of the closest question.
//! When no question is close enough the reply is `Reply::Unknown`, and the
//! session can ask the user to teach an answer through `learn`.
//!
//! In conversation mode the lookup key is every user message of the session
//! so far joined with newlines, so an answer can depend on what was said
//! before. Answers taught in that mode are stored under the same joined key.
//!
use crate::bot::knowledge::{KnowledgeStore, Learned, QaPair};
use crate::bot::matcher::FuzzyMatcher;
use crate::bot::responder::{Reply, Responder};
use crate::core::error::Result;
use tracing::debug;

/// Answers from the knowledge base and learns new pairs.
#[derive(Debug)]
pub struct LearningResponder {
    store: KnowledgeStore,
    matcher: FuzzyMatcher,
    use_conversation: bool,
    context: Vec<String>,
}

impl LearningResponder {
    pub fn new(store: KnowledgeStore, matcher: FuzzyMatcher) -> Self {
        Self {
            store,
            matcher,
            use_conversation: false,
            context: Vec::new(),
        }
    }

    /// Match on the whole conversation instead of the latest message.
    pub fn with_conversation(mut self, enabled: bool) -> Self {
        self.use_conversation = enabled;
        self
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    fn query_for(&mut self, message: &str) -> String {
        if !self.use_conversation {
            return message.to_string();
        }
        self.context.push(message.to_string());
        self.context.join("\n")
    }

    /// The stored pair whose question is closest to `query`, if any.
    pub fn lookup(&self, query: &str) -> Option<&QaPair> {
        if let Some(pair) = self.store.pair_for(query) {
            return Some(pair);
        }
        let questions: Vec<&str> = self.store.questions().collect();
        let best = self.matcher.best_match(query, &questions)?;
        debug!(
            "Best match for {:?}: {:?} (score {:.3})",
            query, best.text, best.score
        );
        self.store.pairs().get(best.index)
    }
}

impl Responder for LearningResponder {
    fn name(&self) -> &'static str {
        "learn"
    }

    fn respond(&mut self, message: &str) -> Result<Reply> {
        let query = self.query_for(message);
        let reply = match self.lookup(&query) {
            Some(pair) => Reply::Answer {
                text: pair.answer.clone(),
                matched: Some(pair.question.clone()),
                query,
            },
            None => Reply::Unknown { query },
        };
        Ok(reply)
    }

    fn learn(&mut self, question: &str, answer: &str) -> Result<Option<Learned>> {
        self.store.upsert(question, answer).map(Some)
    }
}
