//! The question/answer loop.

use std::io::Write;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use timequiz_core::QuestionSet;

use crate::input::AnswerSource;
use crate::say;

/// Presents every question in order and counts exact matches.
pub struct QuizRunner<A, W> {
    questions: QuestionSet,
    answers: A,
    writer: W,
}

impl<A, W> QuizRunner<A, W>
where
    A: AnswerSource,
    W: Write,
{
    pub fn new(questions: QuestionSet, answers: A, writer: W) -> Self {
        Self {
            questions,
            answers,
            writer,
        }
    }

    /// Ask every question once and return the number answered correctly.
    ///
    /// A closed input stream counts as a wrong answer and the loop moves on.
    pub async fn run(&mut self) -> usize {
        let total = self.questions.len();
        let mut correct = 0;

        for (i, question) in self.questions.iter().enumerate() {
            say(
                &mut self.writer,
                format_args!("{} ?\nEnter text: ", question.prompt),
            );

            let is_correct = match self.answers.next_line().await {
                Some(line) => question.is_correct(&line),
                None => {
                    tracing::debug!("no input for question {}", i + 1);
                    false
                }
            };
            if is_correct {
                correct += 1;
            }
            tracing::debug!(question = i + 1, total, is_correct, "answer recorded");
        }

        correct
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<A, W> QuizRunner<A, W>
where
    A: AnswerSource + 'static,
    W: Write + Send + 'static,
{
    /// Run the quiz as its own task.
    ///
    /// The receiver gets the final count once, after the last question.
    pub fn spawn(mut self) -> (JoinHandle<()>, oneshot::Receiver<usize>) {
        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            let correct = self.run().await;
            let _ = tx.send(correct);
        });
        (handle, rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedAnswers;
    use timequiz_core::Question;

    fn scenario_a() -> QuestionSet {
        QuestionSet::new(vec![
            Question::new("2+2", "4"),
            Question::new("cap city of FR", "paris"),
            Question::new("1+1", "2"),
        ])
    }

    #[tokio::test]
    async fn counts_exact_matches() {
        let answers = ScriptedAnswers::new(["4\n", "paris\n", "3\n"]);
        let mut runner = QuizRunner::new(scenario_a(), answers, Vec::new());
        assert_eq!(runner.run().await, 2);
    }

    #[tokio::test]
    async fn prompts_each_question_in_order() {
        let answers = ScriptedAnswers::new(["4\n", "paris\n", "2\n"]);
        let mut runner = QuizRunner::new(scenario_a(), answers, Vec::new());
        assert_eq!(runner.run().await, 3);

        let output = String::from_utf8(runner.into_writer()).unwrap();
        assert_eq!(
            output,
            "2+2 ?\nEnter text: cap city of FR ?\nEnter text: 1+1 ?\nEnter text: "
        );
    }

    #[tokio::test]
    async fn case_and_whitespace_matter() {
        let answers = ScriptedAnswers::new(["4 \n", "Paris\n", " 2\n"]);
        let mut runner = QuizRunner::new(scenario_a(), answers, Vec::new());
        assert_eq!(runner.run().await, 0);
    }

    #[tokio::test]
    async fn closed_input_counts_as_wrong() {
        let questions = QuestionSet::new(vec![
            Question::new("2+2", "4"),
            Question::new("empty answer", ""),
            Question::new("1+1", "2"),
        ]);
        let answers = ScriptedAnswers::new(["4\n"]);
        let mut runner = QuizRunner::new(questions, answers, Vec::new());
        assert_eq!(runner.run().await, 1);

        let output = String::from_utf8(runner.into_writer()).unwrap();
        assert_eq!(output.matches("Enter text: ").count(), 3);
    }

    #[tokio::test]
    async fn spawned_runner_reports_once() {
        let answers = ScriptedAnswers::new(["4\n", "paris\n", "2\n"]);
        let (handle, rx) = QuizRunner::new(scenario_a(), answers, std::io::sink()).spawn();
        assert_eq!(rx.await.unwrap(), 3);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn empty_set_scores_zero_without_prompting() {
        let mut runner = QuizRunner::new(QuestionSet::default(), ScriptedAnswers::silent(), Vec::new());
        assert_eq!(runner.run().await, 0);
        assert!(runner.into_writer().is_empty());
    }
}
