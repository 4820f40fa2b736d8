//! # Parley Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! `parley ask` answers a single question from the knowledge base without
//! starting a session. When nothing matches, the command fails with
//! `No known answer for '<question>'.` so scripts can tell the difference.
//! With `--candidates N` it prints up to N matching questions with their
//! scores instead of just the best answer.
//!
//! ```bash
//! parley ask what is your name
//! parley ask --candidates 3 "how do I reset my password"
//! ```
//!
use crate::bot::knowledge::KnowledgeStore;
use crate::bot::matcher::FuzzyMatcher;
use crate::core::config::Config;
use crate::core::error::{ParleyError, Result};
use clap::Parser;
use std::num::NonZeroUsize;
use tracing::debug;

/// # Ask Arguments (`AskArgs`)
#[derive(Parser, Debug)]
#[command(about = "Answer one question from the knowledge base")]
pub struct AskArgs {
    /// The question; multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    question: Vec<String>,

    /// Minimum similarity, 0.0 to 1.0.
    #[arg(short, long)]
    threshold: Option<f64>,

    /// List up to N matching questions with scores.
    #[arg(short = 'n', long, value_name = "N")]
    candidates: Option<NonZeroUsize>,
}

/// # Handle Ask Command (`handle_ask`)
pub fn handle_ask(args: AskArgs, config: &Config) -> Result<()> {
    let question = args.question.join(" ");
    let threshold = args.threshold.unwrap_or(config.matching.threshold);
    let matcher = FuzzyMatcher::new(threshold)?.case_sensitive(config.matching.case_sensitive);
    let store = KnowledgeStore::open(&config.knowledge.path)?;
    debug!(
        "Looking up {:?} among {} question(s) with cutoff {}",
        question,
        store.len(),
        matcher.cutoff()
    );

    let questions: Vec<&str> = store.questions().collect();
    let limit = args.candidates.map_or(1, NonZeroUsize::get);
    let found = matcher.close_matches(&question, &questions, limit);
    if found.is_empty() {
        anyhow::bail!(ParleyError::NoMatch { question });
    }

    match args.candidates {
        Some(_) => {
            for candidate in &found {
                let answer = &store.pairs()[candidate.index].answer;
                println!("{:.2}  {}  =>  {}", candidate.score, candidate.text, answer);
            }
        }
        None => println!("{}", store.pairs()[found[0].index].answer),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_multi_word_question() {
        let args = AskArgs::try_parse_from(["ask", "what", "is", "rust"]).unwrap();
        assert_eq!(args.question.join(" "), "what is rust");
        assert_eq!(args.candidates, None);
    }

    #[test]
    fn test_requires_question() {
        assert!(AskArgs::try_parse_from(["ask"]).is_err());
    }

    #[test]
    fn test_parses_candidates() {
        let args = AskArgs::try_parse_from(["ask", "-n", "3", "hello"]).unwrap();
        assert_eq!(args.candidates, NonZeroUsize::new(3));
    }

    #[test]
    fn test_rejects_zero_candidates() {
        assert!(AskArgs::try_parse_from(["ask", "--candidates", "0", "hello"]).is_err());
    }
}
