//! Session coordinator.
//!
//! Races the quiz runner against the countdown and interrupt requests and
//! returns the first result observed. There is no priority between the three
//! sources: when two are ready at once, whichever `select!` polls first wins.

use std::io::Write;
use std::time::Duration;

use timequiz_core::{NotCompletedReason, QuestionSet, QuizError, QuizOutcome, SessionConfig};

use crate::countdown::CountdownTimer;
use crate::input::AnswerSource;
use crate::interrupt::InterruptWatcher;
use crate::quiz::QuizRunner;
use crate::say;

/// Session lifecycle hooks.
pub trait SessionObserver: Send + Sync {
    fn on_started(&self, questions: usize, timeout: Duration);
    fn on_outcome(&self, outcome: &QuizOutcome);
}

/// No-op observer.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {
    fn on_started(&self, _: usize, _: Duration) {}
    fn on_outcome(&self, _: &QuizOutcome) {}
}

/// Observer that records the session through `tracing`.
pub struct TracingObserver;

impl SessionObserver for TracingObserver {
    fn on_started(&self, questions: usize, timeout: Duration) {
        tracing::info!(questions, timeout_secs = timeout.as_secs(), "quiz started");
    }

    fn on_outcome(&self, outcome: &QuizOutcome) {
        match outcome {
            QuizOutcome::Completed { correct, total } => {
                tracing::info!(correct, total, "quiz completed");
            }
            QuizOutcome::NotCompleted { reason } => {
                tracing::info!(%reason, "quiz not completed");
            }
        }
    }
}

/// One timed run over a question set.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: QuestionSet,
    timeout: Duration,
}

impl QuizSession {
    /// A zero timeout is a configuration error, not "no limit".
    pub fn new(questions: QuestionSet, timeout: Duration) -> Result<Self, QuizError> {
        if timeout.is_zero() {
            return Err(QuizError::InvalidTimeout(timeout.as_secs()));
        }
        Ok(Self { questions, timeout })
    }

    pub fn from_config(questions: QuestionSet, config: &SessionConfig) -> Self {
        Self {
            questions,
            timeout: config.timeout(),
        }
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run the session to its single outcome.
    ///
    /// Waits for one start line, then launches the countdown and the quiz
    /// runner as separate tasks and returns as soon as the first of quiz
    /// completion, countdown expiry or an interrupt is observed. The losing
    /// tasks are aborted; a pending blocking read inside the answer source is
    /// simply abandoned.
    pub async fn run<A, W>(
        self,
        mut answers: A,
        mut writer: W,
        interrupt: &mut InterruptWatcher,
        observer: &dyn SessionObserver,
    ) -> QuizOutcome
    where
        A: AnswerSource + 'static,
        W: Write + Send + 'static,
    {
        let total = self.questions.len();
        if total == 0 {
            let outcome = QuizOutcome::Completed { correct: 0, total };
            observer.on_outcome(&outcome);
            return outcome;
        }

        say(
            &mut writer,
            format_args!("Please press enter to start the quiz."),
        );
        tokio::select! {
            _ = answers.next_line() => {}
            _ = interrupt.wait() => {
                let outcome = QuizOutcome::NotCompleted {
                    reason: NotCompletedReason::Interrupted,
                };
                observer.on_outcome(&outcome);
                return outcome;
            }
        }

        say(
            &mut writer,
            format_args!("Countdown started: {} seconds\n", self.timeout.as_secs()),
        );
        observer.on_started(total, self.timeout);

        let (countdown, mut expired) = CountdownTimer::new(self.timeout).spawn();
        let (runner, mut finished) = QuizRunner::new(self.questions, answers, writer).spawn();

        let outcome = tokio::select! {
            Ok(correct) = &mut finished => QuizOutcome::Completed { correct, total },
            Ok(()) = &mut expired => QuizOutcome::NotCompleted {
                reason: NotCompletedReason::TimedOut,
            },
            _ = interrupt.wait() => QuizOutcome::NotCompleted {
                reason: NotCompletedReason::Interrupted,
            },
        };

        countdown.abort();
        runner.abort();

        observer.on_outcome(&outcome);
        outcome
    }
}
