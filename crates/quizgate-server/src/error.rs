//! Server error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use quizgate_core::QuizError;

/// Errors that can occur in the quizgate server
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to the specified address
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// A quiz operation failed
    #[error(transparent)]
    Quiz(#[from] QuizError),

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON body returned for failed requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ServerError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ServerError::Quiz(QuizError::SessionNotFound(_)) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ServerError::Quiz(QuizError::InvalidArgument(_)) => {
                (StatusCode::BAD_REQUEST, "INVALID_ARGUMENT")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
                code: code.into(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_errors_map_to_client_statuses() {
        let not_found = ServerError::from(QuizError::SessionNotFound("x_y".into()));
        assert_eq!(
            not_found.status_and_code(),
            (StatusCode::NOT_FOUND, "NOT_FOUND")
        );

        let invalid = ServerError::from(QuizError::InvalidArgument("name is required".into()));
        assert_eq!(
            invalid.status_and_code(),
            (StatusCode::BAD_REQUEST, "INVALID_ARGUMENT")
        );

        let empty = ServerError::from(QuizError::EmptyPool);
        assert_eq!(empty.status_and_code().0, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
