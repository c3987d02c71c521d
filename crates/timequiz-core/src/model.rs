//! Core data model types for timequiz.
//!
//! Questions are immutable once parsed; a session produces exactly one
//! [`QuizOutcome`].

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// A single prompt and the answer that counts as correct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    /// Text shown to the user.
    pub prompt: String,
    /// The exact string the user has to type.
    pub answer: String,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    /// Check a raw input line against the expected answer.
    ///
    /// Only the line terminator is removed. Case and inner whitespace matter.
    pub fn is_correct(&self, raw_line: &str) -> bool {
        strip_line_ending(raw_line) == self.answer
    }
}

/// Remove one trailing `\n` (or `\r\n`) from a line read from a terminal.
pub fn strip_line_ending(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

/// An ordered list of questions. Order is presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSet(Vec<Question>);

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self(questions)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.0.iter()
    }

    pub fn questions(&self) -> &[Question] {
        &self.0
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Question] {
        &mut self.0
    }
}

impl From<Vec<Question>> for QuestionSet {
    fn from(questions: Vec<Question>) -> Self {
        Self(questions)
    }
}

impl FromIterator<Question> for QuestionSet {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for QuestionSet {
    type Item = Question;
    type IntoIter = std::vec::IntoIter<Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Why a session ended without a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotCompletedReason {
    /// The countdown expired first.
    TimedOut,
    /// The process received an interrupt or terminate request first.
    Interrupted,
}

impl fmt::Display for NotCompletedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotCompletedReason::TimedOut => write!(f, "timed out"),
            NotCompletedReason::Interrupted => write!(f, "interrupted"),
        }
    }
}

/// The single result of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuizOutcome {
    /// Every question was answered before the deadline.
    Completed { correct: usize, total: usize },
    /// The session was cut short. Partial progress is discarded.
    NotCompleted { reason: NotCompletedReason },
}

impl QuizOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, QuizOutcome::Completed { .. })
    }

    /// Number of correct answers, if the quiz was finished.
    pub fn correct(&self) -> Option<usize> {
        match self {
            QuizOutcome::Completed { correct, .. } => Some(*correct),
            QuizOutcome::NotCompleted { .. } => None,
        }
    }

    /// The final line printed to the user.
    pub fn summary(&self) -> String {
        match self {
            QuizOutcome::Completed { correct, total } => {
                format!("{correct} questions answered correctly out of {total}")
            }
            QuizOutcome::NotCompleted {
                reason: NotCompletedReason::TimedOut,
            } => "Didn't finish the quiz in time! Please try again or set a longer timer."
                .to_string(),
            QuizOutcome::NotCompleted {
                reason: NotCompletedReason::Interrupted,
            } => "Quiz interrupted before it was finished.".to_string(),
        }
    }
}

/// Values fixed before a session starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Path of the CSV question file.
    pub file_path: PathBuf,
    /// Whole-session deadline in seconds. Always positive.
    timeout_secs: u64,
    /// Randomize presentation order.
    pub shuffle: bool,
    /// Fixed shuffle seed for reproducible runs.
    pub seed: Option<u64>,
}

impl SessionConfig {
    pub fn new(
        file_path: impl Into<PathBuf>,
        timeout_secs: u64,
        shuffle: bool,
    ) -> Result<Self, QuizError> {
        if timeout_secs == 0 {
            return Err(QuizError::InvalidTimeout(timeout_secs));
        }
        Ok(Self {
            file_path: file_path.into(),
            timeout_secs,
            shuffle,
            seed: None,
        })
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
