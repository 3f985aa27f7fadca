//! The `quizgate assign` command.

use std::path::PathBuf;

use anyhow::Result;

use quizgate_core::questions::load_pool;
use quizgate_core::{Assigner, AssignmentAlgorithm};

use super::OutputFormat;

pub fn execute(
    name: String,
    email: String,
    questions: Option<PathBuf>,
    algorithm: Option<String>,
    config_path: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let config = super::resolve_config(config_path.as_deref(), questions)?;
    let algorithm = match algorithm {
        Some(a) => a
            .parse::<AssignmentAlgorithm>()
            .map_err(|e| anyhow::anyhow!(e))?,
        None => config.assignment,
    };

    let pool = load_pool(&config.questions)?;
    let assignment = Assigner::new(algorithm).assign(&pool, &name, &email);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&assignment)?);
        }
        OutputFormat::Text => {
            println!("Student:  {}", assignment.student_id);
            println!("Seed:     {}", Assigner::seed_for(&name, &email));
            println!(
                "Question: #{} of {} ({algorithm})",
                assignment.question_index,
                pool.len()
            );
            println!("\n{}", assignment.question);
        }
    }

    Ok(())
}
