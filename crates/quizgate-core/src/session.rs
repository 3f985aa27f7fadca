//! Session storage.
//!
//! Sessions live only as long as the process. The store is the one piece
//! of shared mutable state: writes and reads of a single key are atomic,
//! nothing more is promised.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::QuizError;
use crate::model::Session;

/// Keyed storage for assigned questions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert a session, replacing any previous one for the same student id.
    async fn put(&self, session: Session);

    /// Fetch a session by student id.
    async fn get(&self, student_id: &str) -> Result<Session, QuizError>;

    /// Number of stored sessions.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// `HashMap` behind a `RwLock`.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, session: Session) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.student_id.clone(), session);
    }

    async fn get(&self, student_id: &str) -> Result<Session, QuizError> {
        self.sessions
            .read()
            .await
            .get(student_id)
            .cloned()
            .ok_or_else(|| QuizError::SessionNotFound(student_id.to_string()))
    }

    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
