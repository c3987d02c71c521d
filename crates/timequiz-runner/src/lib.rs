//! timequiz-runner — The timed quiz session.
//!
//! A session races three independent sources against each other: the quiz
//! runner collecting answers, a countdown, and process interrupt signals.
//! Whichever reports first decides the [`QuizOutcome`]; the others are
//! aborted.
//!
//! [`QuizOutcome`]: timequiz_core::QuizOutcome

pub mod countdown;
pub mod input;
pub mod interrupt;
pub mod quiz;
pub mod session;

use std::fmt;
use std::io::Write;

pub use countdown::CountdownTimer;
pub use input::{AnswerSource, ScriptedAnswers, StdinAnswers};
pub use interrupt::{InterruptTrigger, InterruptWatcher};
pub use quiz::QuizRunner;
pub use session::{NoopObserver, QuizSession, SessionObserver, TracingObserver};

/// Write and flush terminal text. Output failures never end a session.
pub(crate) fn say<W: Write>(writer: &mut W, text: fmt::Arguments<'_>) {
    if let Err(e) = writer.write_fmt(text).and_then(|()| writer.flush()) {
        tracing::debug!("failed to write to terminal: {e}");
    }
}
