//! Heuristic response scoring.
//!
//! A response is scored from its length, readability and sentence count.
//! The rules form an if/else chain (first match wins) followed by a length
//! bonus:
//!
//! | condition                      | score                             |
//! |--------------------------------|-----------------------------------|
//! | fewer than `min_chars` chars   | 0, no further analysis            |
//! | fewer than `min_words` words   | 2                                 |
//! | grade above `max_grade`        | `max(0, 10 - (grade - max_grade))`|
//! | fewer than `min_sentences`     | `min(6, 2 + 2 * sentences)`       |
//! | otherwise                      | 8                                 |
//! | more than `bonus_words` words  | `+1`, capped at 10                |
//!
//! The raw score can land between the feedback levels (9 after a bonus,
//! 4.8 from the readability rule), so feedback is chosen by [`ScoreBand`]:
//! the highest level at or below the score.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::text::{round1, TextSignals};

/// Highest possible score.
pub const MAX_SCORE: f64 = 10.0;

/// Thresholds for the scoring rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Trimmed responses shorter than this (in characters) score 0.
    pub min_chars: usize,
    /// Responses with fewer words score 2.
    pub min_words: usize,
    /// Grade level above which the readability penalty applies.
    pub max_grade: f64,
    /// Responses with fewer sentences are capped at 6.
    pub min_sentences: usize,
    /// Responses with more words get a one-point bonus.
    pub bonus_words: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_chars: 10,
            min_words: 20,
            max_grade: 12.0,
            min_sentences: 2,
            bonus_words: 50,
        }
    }
}

/// Feedback levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    NotMeaningful,
    VeryPoor,
    Poor,
    Average,
    Good,
    Excellent,
}

impl ScoreBand {
    /// The band for a raw score: the highest level at or below it.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 10.0 => ScoreBand::Excellent,
            s if s >= 8.0 => ScoreBand::Good,
            s if s >= 6.0 => ScoreBand::Average,
            s if s >= 4.0 => ScoreBand::Poor,
            s if s >= 2.0 => ScoreBand::VeryPoor,
            _ => ScoreBand::NotMeaningful,
        }
    }

    /// The level this band stands for: one of 0, 2, 4, 6, 8, 10.
    pub fn level(self) -> u8 {
        match self {
            ScoreBand::NotMeaningful => 0,
            ScoreBand::VeryPoor => 2,
            ScoreBand::Poor => 4,
            ScoreBand::Average => 6,
            ScoreBand::Good => 8,
            ScoreBand::Excellent => 10,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ScoreBand::NotMeaningful => "Response not meaningful or too short.",
            ScoreBand::VeryPoor => "Very poor response; lacks relevance and depth.",
            ScoreBand::Poor => "Poor response; some relevance but lacks detail.",
            ScoreBand::Average => "Average response; moderately relevant and detailed.",
            ScoreBand::Good => "Good response; relevant and detailed.",
            ScoreBand::Excellent => "Excellent response; highly relevant and detailed.",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScoreBand::NotMeaningful => "not meaningful",
            ScoreBand::VeryPoor => "very poor",
            ScoreBand::Poor => "poor",
            ScoreBand::Average => "average",
            ScoreBand::Good => "good",
            ScoreBand::Excellent => "excellent",
        };
        f.write_str(name)
    }
}

/// The outcome of scoring one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Raw score in `[0, 10]`, one decimal.
    pub score: f64,
    /// Feedback level derived from `score`.
    pub band: ScoreBand,
    /// Human-readable feedback.
    pub feedback: String,
    /// Computed signals; `None` when the response was too short to analyze.
    #[serde(default)]
    pub signals: Option<TextSignals>,
}

impl Evaluation {
    fn too_short() -> Self {
        Self {
            score: 0.0,
            band: ScoreBand::NotMeaningful,
            feedback: "Your response is too short or not meaningful. Score: 0".to_string(),
            signals: None,
        }
    }

    fn scored(score: f64, signals: TextSignals) -> Self {
        let band = ScoreBand::from_score(score);
        Self {
            score,
            band,
            feedback: format!(
                "Your answer scored {score} out of 10.\n{}",
                band.description()
            ),
            signals: Some(signals),
        }
    }
}

/// Scores free-text responses.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a response.
    pub fn evaluate(&self, response: &str) -> Evaluation {
        let text = response.trim();
        if text.chars().count() < self.config.min_chars {
            return Evaluation::too_short();
        }

        let signals = TextSignals::analyze(text);
        tracing::debug!(
            words = signals.word_count,
            sentences = signals.sentence_count,
            grade = signals.readability,
            "analyzed response"
        );

        Evaluation::scored(self.score_signals(&signals), signals)
    }

    /// Apply the rule chain and bonus to precomputed signals.
    pub fn score_signals(&self, signals: &TextSignals) -> f64 {
        let cfg = &self.config;

        let base = if signals.word_count < cfg.min_words {
            2.0
        } else if signals.readability > cfg.max_grade {
            (MAX_SCORE - (signals.readability - cfg.max_grade)).max(0.0)
        } else if signals.sentence_count < cfg.min_sentences {
            (2.0 + signals.sentence_count as f64 * 2.0).min(6.0)
        } else {
            8.0
        };

        let score = if signals.word_count > cfg.bonus_words {
            (base + 1.0).min(MAX_SCORE)
        } else {
            base
        };

        round1(score)
    }
}
