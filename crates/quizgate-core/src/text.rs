//! Text signals used by the scorer.
//!
//! Word, sentence and syllable counts are heuristics, not linguistics:
//!
//! - A *word* is a whitespace-delimited token. Tokens with no alphanumeric
//!   character still count as words but never open a sentence.
//! - A *sentence* ends at a token whose last character, ignoring trailing
//!   closing quotes and brackets, is `.`, `!` or `?`. Trailing words with
//!   no terminal punctuation form one last sentence. Abbreviations such as
//!   "e.g." therefore end a sentence.
//! - *Syllables* are runs of vowels (`aeiouy`), minus a silent final `e`.

use serde::{Deserialize, Serialize};

const TERMINALS: [char; 3] = ['.', '!', '?'];
const CLOSERS: [char; 9] = ['"', '\'', ')', ']', '}', '»', '”', '’', '›'];

/// Signals computed over a (trimmed) response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextSignals {
    /// Whitespace-delimited tokens, punctuation included.
    pub word_count: usize,
    /// Sentences per [`count_sentences`].
    pub sentence_count: usize,
    /// Flesch–Kincaid grade level, one decimal.
    pub readability: f64,
}

impl TextSignals {
    pub fn analyze(text: &str) -> Self {
        Self {
            word_count: text.split_whitespace().count(),
            sentence_count: count_sentences(text),
            readability: flesch_kincaid_grade(text),
        }
    }
}

fn is_word(token: &str) -> bool {
    token.chars().any(char::is_alphanumeric)
}

fn ends_sentence(token: &str) -> bool {
    token
        .trim_end_matches(CLOSERS)
        .ends_with(TERMINALS)
}

/// Count sentences. Segments without any word are not counted.
pub fn count_sentences(text: &str) -> usize {
    let mut sentences = 0;
    let mut has_word = false;
    for token in text.split_whitespace() {
        has_word |= is_word(token);
        if ends_sentence(token) {
            if has_word {
                sentences += 1;
            }
            has_word = false;
        }
    }
    if has_word {
        sentences += 1;
    }
    sentences
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimate syllables in a single word. Never returns 0.
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if letters.is_empty() {
        // numerals and symbols
        return 1;
    }

    let mut groups = 0;
    let mut prev_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = vowel;
    }

    let len = letters.len();
    if len > 2 && letters[len - 1] == 'e' {
        let before = letters[len - 2];
        if !is_vowel(before) && before != 'l' && groups > 1 {
            groups -= 1;
        }
    }

    groups.max(1)
}

/// Flesch–Kincaid grade level, rounded to one decimal.
///
/// `0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59`.
/// Text without words grades 0.
pub fn flesch_kincaid_grade(text: &str) -> f64 {
    let words: Vec<&str> = text.split_whitespace().filter(|t| is_word(t)).collect();
    if words.is_empty() {
        return 0.0;
    }
    let sentences = count_sentences(text).max(1) as f64;
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let word_count = words.len() as f64;

    let grade = 0.39 * (word_count / sentences) + 11.8 * (syllables as f64 / word_count) - 15.59;
    round1(grade)
}

pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
