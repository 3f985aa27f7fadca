//! The `quizgate serve` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use quizgate_core::questions::load_pool;
use quizgate_core::{Assigner, InMemorySessionStore, QuizService, Scorer};
use quizgate_server::{AppState, QuizServer, ServerConfig};

pub async fn execute(
    questions: Option<PathBuf>,
    bind: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = super::resolve_config(config_path.as_deref(), questions)?;
    if let Some(bind) = bind {
        config.bind = bind;
    }

    // An unusable bank stops startup here, never per request
    let pool = load_pool(&config.questions)?;

    let quiz = QuizService::new(
        pool,
        Assigner::new(config.assignment),
        Scorer::new(config.scoring.clone()),
        Arc::new(InMemorySessionStore::new()),
    );
    let scoring = quiz.scorer().config();
    tracing::info!(
        algorithm = %config.assignment,
        min_chars = scoring.min_chars,
        min_words = scoring.min_words,
        max_grade = scoring.max_grade,
        min_sentences = scoring.min_sentences,
        bonus_words = scoring.bonus_words,
        "quiz configured"
    );

    let server = QuizServer::new(ServerConfig { bind: config.bind }, AppState::new(quiz));
    server.run().await?;

    Ok(())
}
