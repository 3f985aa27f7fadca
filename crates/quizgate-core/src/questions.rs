//! Question bank loading and validation.
//!
//! Banks are TOML files or plain text with one question per line:
//!
//! ```toml
//! name = "Logical reasoning"
//! questions = [
//!     "If all bloops are razzies and all razzies are lazzies, are all bloops lazzies?",
//! ]
//! ```
//!
//! `[[questions]]` tables with a `text` key are accepted as well. Blank
//! entries are dropped with a warning; order is otherwise preserved since
//! assignment indexes into it.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::QuestionPool;

/// A loaded question bank.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    /// Display name.
    pub name: String,
    /// Questions in file order, trimmed, blanks removed.
    pub questions: Vec<String>,
    /// Number of blank entries that were dropped.
    pub skipped_blank: usize,
}

impl QuestionBank {
    fn from_entries<I>(name: String, entries: I, source: &Path) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut questions = Vec::new();
        let mut skipped_blank = 0;
        for (position, entry) in entries.into_iter().enumerate() {
            let text = entry.trim();
            if text.is_empty() {
                tracing::warn!(
                    "skipping blank question #{} in {}",
                    position + 1,
                    source.display()
                );
                skipped_blank += 1;
                continue;
            }
            questions.push(text.to_string());
        }
        Self {
            name,
            questions,
            skipped_blank,
        }
    }

    /// Turn the bank into an assignment pool. Fails if there are no questions.
    pub fn into_pool(self) -> Result<QuestionPool> {
        let name = self.name;
        QuestionPool::new(self.questions)
            .with_context(|| format!("question bank '{name}' has no questions"))
    }
}

#[derive(Debug, Deserialize)]
struct TomlQuestionBank {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TomlQuestion {
    Text(String),
    Entry { text: String },
}

impl TomlQuestion {
    fn into_text(self) -> String {
        match self {
            TomlQuestion::Text(text) | TomlQuestion::Entry { text } => text,
        }
    }
}

fn default_bank_name(source_path: &Path) -> String {
    source_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "questions".to_string())
}

/// Load a question bank, choosing the format from the file extension.
pub fn load_question_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;

    let bank = if path.extension().is_some_and(|ext| ext == "toml") {
        parse_bank_str(&content, path)?
    } else {
        parse_bank_lines(&content, path)
    };

    tracing::info!(
        "loaded {} questions from {}",
        bank.questions.len(),
        path.display()
    );
    Ok(bank)
}

/// Load a question bank straight into a pool.
pub fn load_pool(path: &Path) -> Result<QuestionPool> {
    load_question_bank(path)?.into_pool()
}

/// Parse a TOML question bank (useful for testing).
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlQuestionBank = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let name = parsed
        .name
        .unwrap_or_else(|| default_bank_name(source_path));

    Ok(QuestionBank::from_entries(
        name,
        parsed.questions.into_iter().map(TomlQuestion::into_text),
        source_path,
    ))
}

/// Parse a plain-text bank: one question per line, `#` starts a comment line.
pub fn parse_bank_lines(content: &str, source_path: &Path) -> QuestionBank {
    let entries = content
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string);
    QuestionBank::from_entries(default_bank_name(source_path), entries, source_path)
}

/// A warning from question bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based position of the question, if the warning is about one.
    pub position: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Check a bank for issues that would not stop it from loading.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if bank.questions.is_empty() {
        warnings.push(ValidationWarning {
            position: None,
            message: "bank has no questions; the server will refuse to start".into(),
        });
    }

    if bank.skipped_blank > 0 {
        warnings.push(ValidationWarning {
            position: None,
            message: format!("{} blank question(s) skipped", bank.skipped_blank),
        });
    }

    // Duplicates make some questions more likely than others
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    for (i, question) in bank.questions.iter().enumerate() {
        if let Some(first) = first_seen.get(question.as_str()) {
            warnings.push(ValidationWarning {
                position: Some(i + 1),
                message: format!("duplicate of question #{first}"),
            });
        } else {
            first_seen.insert(question, i + 1);
        }
    }

    warnings
}
