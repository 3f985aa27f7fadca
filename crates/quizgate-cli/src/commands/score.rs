//! The `quizgate score` command.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

use quizgate_core::config::load_config_from;
use quizgate_core::{Evaluation, Scorer};

use super::OutputFormat;

pub fn execute(
    text: Option<String>,
    file: Option<PathBuf>,
    config_path: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let response = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read answer: {}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read answer from stdin")?;
            buf
        }
    };

    let config = load_config_from(config_path.as_deref())?;
    let evaluation = Scorer::new(config.scoring).evaluate(&response);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&evaluation)?);
        }
        OutputFormat::Text => print_evaluation(&evaluation),
    }

    Ok(())
}

fn print_evaluation(evaluation: &Evaluation) {
    use comfy_table::{Cell, Table};

    if let Some(signals) = &evaluation.signals {
        let mut table = Table::new();
        table.set_header(vec!["Words", "Sentences", "Grade level"]);
        table.add_row(vec![
            Cell::new(signals.word_count),
            Cell::new(signals.sentence_count),
            Cell::new(format!("{:.1}", signals.readability)),
        ]);
        println!("{table}\n");
    }

    println!("Score: {} / 10 ({})", evaluation.score, evaluation.band);
    println!("{}", evaluation.feedback);
}
