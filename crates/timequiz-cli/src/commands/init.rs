//! The `timequiz init` command.

use std::path::Path;

use anyhow::{Context, Result};

use timequiz_core::config::CONFIG_FILE_NAME;

const PROBLEMS_FILE: &str = "problems.csv";

pub fn execute() -> Result<()> {
    write_if_missing(Path::new(CONFIG_FILE_NAME), SAMPLE_CONFIG)?;
    write_if_missing(Path::new(PROBLEMS_FILE), SAMPLE_PROBLEMS)?;

    println!("\nNext steps:");
    println!("  1. Edit {PROBLEMS_FILE} with your own prompt,answer rows");
    println!("  2. Run: timequiz validate --file-path {PROBLEMS_FILE}");
    println!("  3. Run: timequiz --time-out 30 --shuffle");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# timequiz configuration
# Command-line flags take precedence over these values.

file_path = "./problems.csv"
timeout_secs = 30
shuffle = false
"#;

const SAMPLE_PROBLEMS: &str = "5+5,10
7+3,10
1+1,2
8+3,11
1+2,3
8+6,14
3+1,4
1+4,5
5+1,6
2+3,5
3+3,6
2+4,6
5+2,7
\"what 2+2, sir?\",4
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_files_are_valid() {
        let config: timequiz_core::config::QuizConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.timeout_secs, 30);

        let questions = timequiz_core::parser::parse_questions_str(
            SAMPLE_PROBLEMS,
            Path::new(PROBLEMS_FILE),
        )
        .unwrap();
        assert_eq!(questions.len(), 14);
        assert!(timequiz_core::parser::validate_questions(&questions).is_empty());
    }
}
