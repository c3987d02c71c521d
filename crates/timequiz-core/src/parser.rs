//! CSV question parser.
//!
//! Loads question sets from two-column CSV files and validates them.
//! Column 0 is the prompt, column 1 the expected answer; any further
//! columns are ignored.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::error::QuizError;
use crate::model::{Question, QuestionSet};

/// Parse a CSV file into a `QuestionSet`.
pub fn load_questions(path: &Path) -> Result<QuestionSet, QuizError> {
    let file = std::fs::File::open(path).map_err(|source| QuizError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = parse_questions_reader(file, path)?;
    tracing::debug!("loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

/// Parse CSV text into a `QuestionSet` (useful for testing).
pub fn parse_questions_str(content: &str, source_path: &Path) -> Result<QuestionSet, QuizError> {
    parse_questions_reader(content.as_bytes(), source_path)
}

/// Parse any CSV byte stream. Every row must have the same number of fields
/// as the first one, and at least two.
pub fn parse_questions_reader<R: Read>(
    reader: R,
    source_path: &Path,
) -> Result<QuestionSet, QuizError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut questions = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|source| QuizError::Parse {
            path: source_path.to_path_buf(),
            source,
        })?;

        let (Some(prompt), Some(answer)) = (record.get(0), record.get(1)) else {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(QuizError::MissingAnswer {
                path: source_path.to_path_buf(),
                line,
            });
        };

        questions.push(Question::new(prompt, answer));
    }

    Ok(QuestionSet::new(questions))
}

/// A warning from question set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based position of the question in the file.
    pub index: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a question set for common authoring mistakes.
pub fn validate_questions(set: &QuestionSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_prompts = HashSet::new();
    for (i, question) in set.iter().enumerate() {
        let index = Some(i + 1);

        if !seen_prompts.insert(question.prompt.as_str()) {
            warnings.push(ValidationWarning {
                index,
                message: format!("duplicate prompt: {}", question.prompt),
            });
        }

        if question.prompt.trim().is_empty() {
            warnings.push(ValidationWarning {
                index,
                message: "prompt is empty".into(),
            });
        }

        if question.answer.is_empty() {
            warnings.push(ValidationWarning {
                index,
                message: "expected answer is empty".into(),
            });
        } else if question.answer.trim() != question.answer {
            warnings.push(ValidationWarning {
                index,
                message: "expected answer has leading or trailing whitespace".into(),
            });
        }
    }

    warnings
}
