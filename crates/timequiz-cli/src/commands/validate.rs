//! The `timequiz validate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use timequiz_core::config::load_config_from;
use timequiz_core::{parser, QuestionSet};

pub fn execute(file_path: Option<PathBuf>, list: bool, config_path: Option<PathBuf>) -> Result<()> {
    let path = match file_path {
        Some(p) => p,
        None => load_config_from(config_path.as_deref())?.file_path,
    };

    let questions = parser::load_questions(&path)?;
    println!(
        "Question file: {} ({} questions)",
        path.display(),
        questions.len()
    );

    if list {
        print_questions(&questions);
    }

    let warnings = parser::validate_questions(&questions);
    for w in &warnings {
        let prefix = w
            .index
            .map(|i| format!("  [#{i}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All questions valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}

fn print_questions(questions: &QuestionSet) {
    let mut table = Table::new();
    table.set_header(vec!["#", "Prompt", "Answer"]);

    for (i, q) in questions.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&q.prompt),
            Cell::new(&q.answer),
        ]);
    }

    println!("{table}");
}
