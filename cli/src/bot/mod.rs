//! # Parley Bot (`bot`)
//!
//! File: cli/src/bot/mod.rs
//!
//! ## Overview
//!
//! Everything that makes Parley answer: the data it remembers, how it finds
//! the closest known question, the reply strategies, and the interactive
//! session that ties them to the terminal.
//!
//! ## Architecture
//!
//! ```text
//! knowledge (JSON Q/A file) -> matcher (fuzzy best match) -> responder -> session (terminal)
//!                                                                 |
//!                                                      history (timestamped turns)
//! ```
//!
//! - **`matcher`**: Sequence similarity and ranked close matches.
//! - **`knowledge`**: The question/answer store and its file.
//! - **`history`**: Timestamped conversation log.
//! - **`responder`**: The `Responder` trait and `Reply` type.
//! - **`learning`**: Answers from the knowledge base and learns new pairs.
//! - **`intent`**: Classifier-driven random canned replies.
//! - **`canned`**: Fixed two-entry dictionary.
//! - **`session`**: The read-respond-print loop.
//!

pub mod canned;
pub mod history;
pub mod intent;
pub mod knowledge;
pub mod learning;
pub mod matcher;
pub mod responder;
pub mod session;
