//! # Parley Fuzzy Matcher
//!
//! File: cli/src/bot/matcher.rs
//!
//! ## Overview
//!
//! Finds the known question closest to what the user typed. Similarity is the
//! character diff ratio from `similar`: with `M` characters common to both
//! strings, `ratio = 2 * M / (len(a) + len(b))`, so identical strings score
//! 1.0 and strings sharing nothing score 0.0.
//!
//! `FuzzyMatcher` normalizes both sides, applies the cutoff, and ranks the
//! candidates that pass it.
//!
use crate::core::error::{ParleyError, Result};
use similar::TextDiff;
use std::cmp::Ordering;

/// Default minimum similarity for a question to count as a match.
pub const DEFAULT_CUTOFF: f64 = 0.6;

/// Character-level similarity of `a` and `b` in `[0, 1]`.
pub fn ratio(a: &str, b: &str) -> f64 {
    f64::from(TextDiff::from_chars(a, b).ratio())
}

/// A known string that matched a query.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    /// Position of the candidate in the slice it came from.
    pub index: usize,
    pub text: &'a str,
    pub score: f64,
}

/// Ranks candidate strings by similarity to a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatcher {
    cutoff: f64,
    case_sensitive: bool,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            case_sensitive: false,
        }
    }
}

impl FuzzyMatcher {
    /// Creates a matcher; `cutoff` must be within `[0.0, 1.0]`.
    pub fn new(cutoff: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&cutoff) {
            anyhow::bail!(ParleyError::Config(format!(
                "Match cutoff must be between 0.0 and 1.0, got {}.",
                cutoff
            )));
        }
        Ok(Self {
            cutoff,
            case_sensitive: false,
        })
    }

    /// Compare text exactly instead of normalizing it first.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    fn prepare(&self, text: &str) -> String {
        if self.case_sensitive {
            text.to_string()
        } else {
            normalize(text)
        }
    }

    /// Similarity of two strings after normalization.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        ratio(&self.prepare(a), &self.prepare(b))
    }

    /// Up to `limit` candidates scoring at least the cutoff, best first.
    ///
    /// Equal scores are ordered by the (normalized) candidate text, greatest
    /// first, so results are stable regardless of input order.
    pub fn close_matches<'a, S: AsRef<str>>(
        &self,
        query: &str,
        candidates: &'a [S],
        limit: usize,
    ) -> Vec<Candidate<'a>> {
        if limit == 0 {
            return Vec::new();
        }
        let query = self.prepare(query);
        let mut scored: Vec<(Candidate<'a>, String)> = Vec::new();

        for (index, candidate) in candidates.iter().enumerate() {
            let text = candidate.as_ref();
            let prepared = self.prepare(text);
            let score = ratio(&prepared, &query);
            if score >= self.cutoff {
                scored.push((Candidate { index, text, score }, prepared));
            }
        }

        scored.sort_by(|(left, left_key), (right, right_key)| {
            right
                .score
                .partial_cmp(&left.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| right_key.cmp(left_key))
        });
        scored.truncate(limit);
        scored.into_iter().map(|(candidate, _)| candidate).collect()
    }

    /// The single closest candidate at or above the cutoff.
    pub fn best_match<'a, S: AsRef<str>>(&self, query: &str, candidates: &'a [S]) -> Option<Candidate<'a>> {
        self.close_matches(query, candidates, 1).into_iter().next()
    }
}

/// Lowercases, trims, and collapses whitespace runs to one space.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
