//! timequiz-core — Question model, loading, shuffling and configuration.
//!
//! This crate defines the data types every other timequiz crate passes
//! around, plus the startup collaborators that turn a CSV file and a set of
//! flags into a ready-to-run question set.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod shuffle;

pub use error::QuizError;
pub use model::{NotCompletedReason, Question, QuestionSet, QuizOutcome, SessionConfig};
