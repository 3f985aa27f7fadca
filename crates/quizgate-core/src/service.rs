//! The quiz service: question pool, assigner, scorer and session store
//! behind the three operations a request layer needs.

use std::sync::Arc;

use crate::assign::Assigner;
use crate::error::QuizError;
use crate::model::{QuestionPool, Session};
use crate::scoring::{Evaluation, Scorer};
use crate::session::{InMemorySessionStore, SessionStore};

pub struct QuizService {
    pool: Arc<QuestionPool>,
    assigner: Assigner,
    scorer: Scorer,
    sessions: Arc<dyn SessionStore>,
}

impl QuizService {
    pub fn new(
        pool: QuestionPool,
        assigner: Assigner,
        scorer: Scorer,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            pool: Arc::new(pool),
            assigner,
            scorer,
            sessions,
        }
    }

    /// Service with the default assigner and scorer and an in-memory store.
    pub fn with_defaults(pool: QuestionPool) -> Self {
        Self::new(
            pool,
            Assigner::default(),
            Scorer::default(),
            Arc::new(InMemorySessionStore::new()),
        )
    }

    pub fn pool(&self) -> &QuestionPool {
        &self.pool
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn sessions(&self) -> &dyn SessionStore {
        self.sessions.as_ref()
    }

    /// Assign a question and record the session. Repeat calls overwrite the
    /// session with the same question.
    pub async fn start_session(&self, name: &str, email: &str) -> Session {
        let assignment = self.assigner.assign(&self.pool, name, email);
        tracing::info!(
            student_id = %assignment.student_id,
            question_index = assignment.question_index,
            "session started"
        );
        let session = Session::from(assignment);
        self.sessions.put(session.clone()).await;
        session
    }

    /// The session (and question) for a student id.
    pub async fn current_question(&self, student_id: &str) -> Result<Session, QuizError> {
        self.sessions.get(student_id).await
    }

    /// Score a response. Scoring depends only on the text, so no session is
    /// required; the student id is used for logging.
    pub async fn submit_response(
        &self,
        student_id: &str,
        response: Option<&str>,
    ) -> Result<Evaluation, QuizError> {
        let response =
            response.ok_or_else(|| QuizError::InvalidArgument("response is required".into()))?;

        let evaluation = self.scorer.evaluate(response);
        tracing::info!(
            %student_id,
            score = evaluation.score,
            band = %evaluation.band,
            "response scored"
        );
        Ok(evaluation)
    }
}
