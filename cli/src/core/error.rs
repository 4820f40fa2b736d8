//! # Parley Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout Parley. Domain failures
//! get a dedicated `ParleyError` variant so callers can match on them, while
//! everything else flows through `anyhow` with added context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ParleyError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if question.trim().is_empty() {
//!     anyhow::bail!(ParleyError::EmptyInput("question"));
//! }
//!
//! // Pattern matching on error types
//! match result {
//!     Err(e) if e.downcast_ref::<ParleyError>().is_some_and(|pe| matches!(pe, ParleyError::NoMatch { .. })) => {
//!         println!("Nothing known about that yet.");
//!     }
//!     other => other?,
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the Parley application.
#[derive(Error, Debug)]
pub enum ParleyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Malformed JSON in '{path}': {source}")]
    MalformedJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No known answer for '{question}'.")]
    NoMatch { question: String },

    #[error("The {0} cannot be empty.")]
    EmptyInput(&'static str),

    #[error("Conversation '{id}' not found.")]
    ConversationNotFound { id: String },

    #[error("Intent classifier unavailable: {0}")]
    Classifier(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
