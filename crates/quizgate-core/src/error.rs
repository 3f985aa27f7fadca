//! Quiz error types.
//!
//! These are the conditions the request layer has to tell apart: a broken
//! question pool is fatal at startup, while unknown sessions and missing
//! input are reported back to the caller.

use thiserror::Error;

/// Errors raised by the quiz core.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question pool has no questions.
    #[error("question pool is empty")]
    EmptyPool,

    /// No question has been assigned to this student id.
    #[error("session for student_id '{0}' not found")]
    SessionNotFound(String),

    /// Input was missing or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_student() {
        let err = QuizError::SessionNotFound("ada_ada@example.org".into());
        assert_eq!(
            err.to_string(),
            "session for student_id 'ada_ada@example.org' not found"
        );
    }

    #[test]
    fn invalid_argument_message() {
        let err = QuizError::InvalidArgument("response is required".into());
        assert_eq!(err.to_string(), "invalid argument: response is required");
    }
}
