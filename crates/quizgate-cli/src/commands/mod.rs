pub mod assign;
pub mod init;
pub mod score;
pub mod serve;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ValueEnum;
use quizgate_core::config::{load_config_from, QuizgateConfig};

/// Output format for `assign` and `score`
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Load config and apply a `--questions` override.
pub(crate) fn resolve_config(
    config_path: Option<&Path>,
    questions: Option<PathBuf>,
) -> Result<QuizgateConfig> {
    let mut config = load_config_from(config_path)?;
    if let Some(questions) = questions {
        config.questions = questions;
    }
    Ok(config)
}
