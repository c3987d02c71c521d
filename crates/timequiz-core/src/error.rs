//! Quiz error types.
//!
//! Only startup problems are errors. Timeouts and interruptions are regular
//! outcomes and never show up here.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can stop a quiz session from starting.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question file could not be opened.
    #[error("unable to read input file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The question file is not valid CSV.
    #[error("unable to parse file as CSV for {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row has a prompt but no expected answer.
    #[error("{path}: line {line} has no answer column")]
    MissingAnswer { path: PathBuf, line: u64 },

    /// The session timeout must be a positive number of seconds.
    #[error("timeout must be greater than zero, got {0}s")]
    InvalidTimeout(u64),
}

impl QuizError {
    /// Returns `true` for errors caused by the content of the question file
    /// rather than by access to it.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            QuizError::Parse { .. } | QuizError::MissingAnswer { .. }
        )
    }
}
