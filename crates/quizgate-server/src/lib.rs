//! quizgate-server - HTTP front end for quizgate
//!
//! Learners start a session with their name and email, fetch the question
//! assigned to them, and post an answer to have it scored.

mod error;
pub mod http;
mod state;

use std::sync::Arc;

use tokio::net::TcpListener;

pub use error::{ErrorResponse, ServerError};
pub use http::create_router;
pub use state::AppState;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind, e.g. "127.0.0.1:5000"
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
        }
    }
}

/// The quizgate HTTP server
pub struct QuizServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl QuizServer {
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// Run the server until Ctrl-C
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.bind.clone();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: addr.clone(),
                source: e,
            })?;

        tracing::info!(
            "quizgate server listening on {} ({} questions)",
            addr,
            self.state.quiz.pool().len()
        );

        let router = create_router(self.state);
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;

        tracing::info!("quizgate server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizgate_core::{QuestionPool, QuizService};

    fn state() -> AppState {
        let pool = QuestionPool::new(vec!["Only question?".into()]).unwrap();
        AppState::new(QuizService::with_defaults(pool))
    }

    #[test]
    fn default_bind() {
        assert_eq!(ServerConfig::default().bind, "127.0.0.1:5000");
    }

    #[tokio::test]
    async fn bind_failure_is_reported() {
        let server = QuizServer::new(
            ServerConfig {
                bind: "not-an-address".into(),
            },
            state(),
        );
        let err = server.run().await.unwrap_err();
        assert!(matches!(err, ServerError::Bind { ref addr, .. } if addr == "not-an-address"));
    }
}
