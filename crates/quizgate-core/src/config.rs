//! quizgate configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::assign::AssignmentAlgorithm;
use crate::scoring::ScoringConfig;

/// Top-level quizgate configuration (`quizgate.toml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizgateConfig {
    /// Path to the question bank.
    #[serde(default = "default_questions")]
    pub questions: PathBuf,
    /// Address the server listens on.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// How seeds map to question indices.
    #[serde(default)]
    pub assignment: AssignmentAlgorithm,
    /// Scoring thresholds.
    #[serde(default)]
    pub scoring: ScoringConfig,
}

fn default_questions() -> PathBuf {
    PathBuf::from("questions.toml")
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

impl Default for QuizgateConfig {
    fn default() -> Self {
        Self {
            questions: default_questions(),
            bind: default_bind(),
            assignment: AssignmentAlgorithm::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `quizgate.toml` in the current directory
/// 2. `~/.config/quizgate/config.toml`
///
/// Environment variable overrides: `QUIZGATE_QUESTIONS`, `QUIZGATE_BIND`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizgateConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizgate.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => load_config_file(&path)?,
        None => QuizgateConfig::default(),
    };

    if let Ok(questions) = std::env::var("QUIZGATE_QUESTIONS") {
        config.questions = PathBuf::from(questions);
    }
    if let Ok(bind) = std::env::var("QUIZGATE_BIND") {
        config.bind = bind;
    }

    Ok(config)
}

/// Read and parse one config file, without environment overrides.
fn load_config_file(path: &Path) -> Result<QuizgateConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let mut config = parse_config_str(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    // Relative bank paths are relative to the config file
    if config.questions.is_relative() {
        if let Some(parent) = path.parent() {
            config.questions = parent.join(&config.questions);
        }
    }
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Parse a config file body, resolving `${VAR}` references in string values.
pub fn parse_config_str(content: &str) -> Result<QuizgateConfig> {
    let mut config: QuizgateConfig = toml::from_str(content)?;
    config.bind = resolve_env_vars(&config.bind);
    config.questions = PathBuf::from(resolve_env_vars(&config.questions.to_string_lossy()));
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizgate"))
}
