//! # Parley Intent Responder
//!
//! File: cli/src/bot/intent.rs
//!
//! ## Overview
//!
//! An alternative reply strategy: instead of looking up a stored answer, the
//! message is classified into an *intent* (greeting, goodbye, thanks, ...)
//! and a random canned reply for that intent is returned.
//!
//! ## Architecture
//!
//! - `IntentClassifier` is the seam for the classifier. It only promises a
//!   ranked list of `(label, confidence)` predictions for a sentence; how a
//!   model is trained or loaded is up to the implementation.
//! - `PatternClassifier` is the built-in implementation. Its confidence for a
//!   tag is the best similarity between the sentence and that tag's example
//!   patterns.
//! - `IntentResponder` picks the top prediction at or above its threshold and
//!   answers with a random reply for it, falling back to a fixed line.
//!
//! Intents are read from a JSON file:
//!
//! ```json
//! {
//!   "intents": [
//!     { "tag": "greeting", "patterns": ["Hi", "Hello"], "responses": ["Hello!", "Hi there!"] }
//!   ]
//! }
//! ```
//!
use crate::bot::matcher::FuzzyMatcher;
use crate::bot::responder::{Reply, Responder};
use crate::common::fs::io;
use crate::core::error::{ParleyError, Result};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Reply used when no intent is confident enough.
pub const FALLBACK_REPLY: &str = "I'm not sure how to respond to that.";

/// One intent: example sentences and the replies it may produce.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub tag: String,
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub responses: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
struct IntentsFile {
    #[serde(default)]
    intents: Vec<Intent>,
}

/// Reads the intents file at `path`.
pub fn load_intents(path: &Path) -> Result<Vec<Intent>> {
    let file = io::read_json::<IntentsFile>(path)?.ok_or_else(|| {
        ParleyError::FileSystem(format!("Intents file '{}' not found.", path.display()))
    })?;
    if file.intents.iter().all(|intent| intent.patterns.is_empty()) {
        anyhow::bail!(ParleyError::Classifier(format!(
            "'{}' defines no intent patterns.",
            path.display()
        )));
    }
    info!(
        "Loaded {} intent(s) from {}",
        file.intents.len(),
        path.display()
    );
    Ok(file.intents)
}

/// A predicted label with its confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub confidence: f64,
}

/// Classifies a sentence into ranked intent predictions, best first.
pub trait IntentClassifier {
    fn classify(&self, sentence: &str) -> Result<Vec<Prediction>>;
}

/// Classifies by similarity to each intent's example patterns.
#[derive(Debug, Clone)]
pub struct PatternClassifier {
    matcher: FuzzyMatcher,
    /// (tag, pattern) for every pattern of every intent.
    patterns: Vec<(String, String)>,
}

impl PatternClassifier {
    pub fn new(intents: &[Intent]) -> Self {
        let patterns = intents
            .iter()
            .flat_map(|intent| {
                intent
                    .patterns
                    .iter()
                    .map(move |pattern| (intent.tag.clone(), pattern.clone()))
            })
            .collect();
        Self {
            matcher: FuzzyMatcher::default(),
            patterns,
        }
    }
}

impl IntentClassifier for PatternClassifier {
    fn classify(&self, sentence: &str) -> Result<Vec<Prediction>> {
        let mut best: HashMap<&str, f64> = HashMap::new();
        for (tag, pattern) in &self.patterns {
            let score = self.matcher.similarity(sentence, pattern);
            let entry = best.entry(tag.as_str()).or_insert(0.0);
            if score > *entry {
                *entry = score;
            }
        }
        let mut predictions: Vec<Prediction> = best
            .into_iter()
            .map(|(label, confidence)| Prediction {
                label: label.to_string(),
                confidence,
            })
            .collect();
        predictions.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.label.cmp(&b.label))
        });
        Ok(predictions)
    }
}

/// Replies with a random canned response for the predicted intent.
pub struct IntentResponder<C, R> {
    classifier: C,
    replies: HashMap<String, Vec<String>>,
    threshold: f64,
    rng: R,
}

impl<C: IntentClassifier, R: Rng> IntentResponder<C, R> {
    pub fn new(classifier: C, intents: &[Intent], threshold: f64, rng: R) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            anyhow::bail!(ParleyError::Config(format!(
                "Intent threshold must be between 0.0 and 1.0, got {}.",
                threshold
            )));
        }
        let mut replies: HashMap<String, Vec<String>> = HashMap::new();
        for intent in intents {
            replies
                .entry(intent.tag.clone())
                .or_default()
                .extend(intent.responses.iter().cloned());
        }
        Ok(Self {
            classifier,
            replies,
            threshold,
            rng,
        })
    }
}

impl<C: IntentClassifier, R: Rng> Responder for IntentResponder<C, R> {
    fn name(&self) -> &'static str {
        "intent"
    }

    fn respond(&mut self, message: &str) -> Result<Reply> {
        let Self {
            classifier,
            replies,
            threshold,
            rng,
        } = self;
        let predictions = classifier.classify(message)?;
        debug!("Intent predictions for {:?}: {:?}", message, predictions);

        let chosen = predictions
            .iter()
            .filter(|p| p.confidence >= *threshold)
            .find_map(|p| replies.get(&p.label).filter(|r| !r.is_empty()));
        let text = match chosen {
            Some(responses) => responses
                .choose(rng)
                .cloned()
                .unwrap_or_else(|| FALLBACK_REPLY.to_string()),
            None => FALLBACK_REPLY.to_string(),
        };
        Ok(Reply::Answer {
            query: message.to_string(),
            text,
            matched: None,
        })
    }
}
