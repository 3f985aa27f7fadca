//! Shared application state for the quizgate server

use chrono::{DateTime, Utc};

use quizgate_core::QuizService;

/// Shared application state accessible by all handlers
pub struct AppState {
    /// Question pool, scorer and sessions
    pub quiz: QuizService,
    /// When the server started
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(quiz: QuizService) -> Self {
        Self {
            quiz,
            started_at: Utc::now(),
        }
    }

    /// Returns how long the server has been running
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
