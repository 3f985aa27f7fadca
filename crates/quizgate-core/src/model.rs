//! Core data model types for quizgate.
//!
//! The question pool, learner identities and the sessions that bind one to
//! the other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// An ordered, non-empty list of questions, fixed for the life of the process.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionPool {
    questions: Vec<String>,
}

impl QuestionPool {
    /// Build a pool. An empty list is a configuration error.
    pub fn new(questions: Vec<String>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyPool);
        }
        Ok(Self { questions })
    }

    /// Number of questions in the pool (always at least 1).
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false`; kept alongside `len` for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The question at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.questions.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(String::as_str)
    }
}

/// Session key for a name/email pair.
///
/// The same string, UTF-8 encoded, is what gets hashed for assignment.
pub fn student_id(name: &str, email: &str) -> String {
    format!("{name}_{email}")
}

/// A question chosen for a learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Session key.
    pub student_id: String,
    /// Position of the question in the pool.
    pub question_index: usize,
    /// The question text.
    pub question: String,
}

/// A stored assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub student_id: String,
    pub question_index: usize,
    pub question: String,
    /// When the question was (last) assigned.
    pub assigned_at: DateTime<Utc>,
}

impl From<Assignment> for Session {
    fn from(a: Assignment) -> Self {
        Self {
            student_id: a.student_id,
            question_index: a.question_index,
            question: a.question,
            assigned_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pool_rejected() {
        assert!(matches!(
            QuestionPool::new(vec![]),
            Err(QuizError::EmptyPool)
        ));
    }

    #[test]
    fn pool_preserves_order() {
        let pool = QuestionPool::new(vec!["first".into(), "second".into()]).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(0), Some("first"));
        assert_eq!(pool.get(1), Some("second"));
        assert_eq!(pool.get(2), None);
        assert_eq!(pool.iter().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn student_id_joins_with_underscore() {
        assert_eq!(student_id("ada", "ada@example.org"), "ada_ada@example.org");
        assert_eq!(
            student_id("Ada Lovelace", "ada@example.org"),
            "Ada Lovelace_ada@example.org"
        );
        assert_eq!(student_id("", ""), "_");
    }

    #[test]
    fn session_from_assignment() {
        let session = Session::from(Assignment {
            student_id: "a_b".into(),
            question_index: 3,
            question: "Why?".into(),
        });
        assert_eq!(session.student_id, "a_b");
        assert_eq!(session.question_index, 3);
        assert_eq!(session.question, "Why?");
    }
}
