//! The `quizgate validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizgate_core::questions::{load_question_bank, validate_bank};

pub fn execute(questions_path: PathBuf) -> Result<()> {
    let bank = load_question_bank(&questions_path)?;

    println!(
        "Question bank: {} ({} questions)",
        bank.name,
        bank.questions.len()
    );

    let warnings = validate_bank(&bank);
    for w in &warnings {
        let prefix = w
            .position
            .map(|n| format!("  [#{n}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    anyhow::ensure!(
        !bank.questions.is_empty(),
        "question bank '{}' has no questions",
        bank.name
    );

    if warnings.is_empty() {
        println!("Question bank valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
