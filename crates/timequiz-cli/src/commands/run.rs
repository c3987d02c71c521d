//! The default `timequiz` command: take a quiz.

use anyhow::{Context, Result};
use serde::Serialize;

use timequiz_core::config::{load_config_from, ConfigOverrides};
use timequiz_core::parser;
use timequiz_core::shuffle::Shuffler;
use timequiz_core::{NotCompletedReason, QuizOutcome};
use timequiz_runner::{InterruptWatcher, QuizSession, StdinAnswers, TracingObserver};

use crate::{OutputFormat, RunArgs};

/// JSON shape for `--format json`.
#[derive(Serialize)]
struct OutcomeReport {
    #[serde(flatten)]
    outcome: QuizOutcome,
    questions: usize,
    timeout_secs: u64,
}

pub async fn execute(args: RunArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;
    let session_config = config.resolve(ConfigOverrides {
        file_path: args.file_path,
        timeout_secs: args.time_out,
        shuffle: args.shuffle,
        seed: args.seed,
    })?;

    // Any problem with the question file ends the program before the quiz starts.
    let questions = parser::load_questions(&session_config.file_path)?;

    let mut shuffler = match session_config.seed {
        Some(seed) => Shuffler::with_seed(session_config.shuffle, seed),
        None => Shuffler::new(session_config.shuffle),
    };
    let questions = shuffler.apply(questions);

    let mut interrupt =
        InterruptWatcher::from_signals().context("failed to subscribe to termination signals")?;
    let answers = StdinAnswers::spawn().context("failed to start reading standard input")?;

    let session = QuizSession::from_config(questions, &session_config);
    let total = session.questions().len();

    tracing::debug!(
        file = %session_config.file_path.display(),
        total,
        shuffle = shuffler.is_enabled(),
        seed = shuffler.seed(),
        "starting session"
    );

    let outcome = session
        .run(answers, std::io::stdout(), &mut interrupt, &TracingObserver)
        .await;

    match args.format {
        OutputFormat::Text => {
            println!("{}", headline(&outcome));
            println!("{}", outcome.summary());
        }
        OutputFormat::Json => {
            let report = OutcomeReport {
                outcome,
                questions: total,
                timeout_secs: session_config.timeout_secs(),
            };
            // Prompts may have left the cursor mid-line.
            println!();
            println!("{}", serde_json::to_string(&report)?);
        }
    }

    Ok(())
}

/// What decided the race.
fn headline(outcome: &QuizOutcome) -> &'static str {
    match outcome {
        QuizOutcome::Completed { total: 0, .. } => "No questions to ask.",
        QuizOutcome::Completed { .. } => "Quiz completed.",
        // The countdown or the signal cut into an open "Enter text: " prompt.
        QuizOutcome::NotCompleted {
            reason: NotCompletedReason::TimedOut,
        } => "\nCountdown completed.",
        QuizOutcome::NotCompleted {
            reason: NotCompletedReason::Interrupted,
        } => "\nProgram interrupted. Exiting...",
    }
}
