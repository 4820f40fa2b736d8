//! # Parley Knowledge Base
//!
//! File: cli/src/bot/knowledge.rs
//!
//! ## Overview
//!
//! The knowledge base is the list of question/answer pairs Parley has been
//! taught. It lives in a JSON file shaped like:
//!
//! ```json
//! {
//!   "questions": [
//!     { "question": "How are you?", "answer": "Fine, thanks." }
//!   ]
//! }
//! ```
//!
//! A bare array of `{question, answer}` records is accepted on load as well.
//! The whole list is kept in memory and rewritten to disk after every change.
//!
use crate::common::fs::io;
use crate::core::error::{ParleyError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One taught question and its answer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

/// On-disk document of the knowledge base.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    #[serde(default)]
    pub questions: Vec<QaPair>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KnowledgeFile {
    Document(KnowledgeBase),
    Records(Vec<QaPair>),
}

impl From<KnowledgeFile> for KnowledgeBase {
    fn from(file: KnowledgeFile) -> Self {
        match file {
            KnowledgeFile::Document(base) => base,
            KnowledgeFile::Records(questions) => KnowledgeBase { questions },
        }
    }
}

/// What `KnowledgeStore::upsert` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Learned {
    Added,
    Replaced,
}

/// A knowledge base bound to the file it is persisted in.
#[derive(Debug)]
pub struct KnowledgeStore {
    path: PathBuf,
    base: KnowledgeBase,
}

impl KnowledgeStore {
    /// Loads the knowledge base at `path`; a missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let base = match io::read_json::<KnowledgeFile>(&path)? {
            Some(file) => KnowledgeBase::from(file),
            None => {
                info!(
                    "No knowledge base at {}, starting with an empty one.",
                    path.display()
                );
                KnowledgeBase::default()
            }
        };
        debug!(
            "Loaded {} question(s) from {}",
            base.questions.len(),
            path.display()
        );
        Ok(Self { path, base })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.base.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.questions.is_empty()
    }

    pub fn pairs(&self) -> &[QaPair] {
        &self.base.questions
    }

    /// Question strings in file order.
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.base.questions.iter().map(|pair| pair.question.as_str())
    }

    /// Record stored for exactly `question`; the first record wins.
    pub fn pair_for(&self, question: &str) -> Option<&QaPair> {
        self.base.questions.iter().find(|pair| pair.question == question)
    }

    /// Answer stored for exactly `question`.
    pub fn answer_for(&self, question: &str) -> Option<&str> {
        self.pair_for(question).map(|pair| pair.answer.as_str())
    }

    /// Stores `answer` for `question` and writes the file.
    ///
    /// An existing record with the exact same question gets its answer
    /// replaced; otherwise a new record is appended.
    pub fn upsert(&mut self, question: &str, answer: &str) -> Result<Learned> {
        if question.trim().is_empty() {
            anyhow::bail!(ParleyError::EmptyInput("question"));
        }
        if answer.trim().is_empty() {
            anyhow::bail!(ParleyError::EmptyInput("answer"));
        }

        let learned = match self
            .base
            .questions
            .iter_mut()
            .find(|pair| pair.question == question)
        {
            Some(pair) => {
                pair.answer = answer.to_string();
                Learned::Replaced
            }
            None => {
                self.base.questions.push(QaPair {
                    question: question.to_string(),
                    answer: answer.to_string(),
                });
                Learned::Added
            }
        };
        self.save()?;
        info!("{:?} answer for question {:?}", learned, question);
        Ok(learned)
    }

    /// Writes the whole knowledge base to its file.
    pub fn save(&self) -> Result<()> {
        io::write_json(&self.path, &self.base)
    }
}
