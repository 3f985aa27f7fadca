//! Request handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use quizgate_core::{Evaluation, QuizError, Session};

use crate::{AppState, ServerError};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the server
    pub status: String,
    /// Server version
    pub version: String,
    /// Seconds since server started
    pub uptime_seconds: i64,
    /// Questions in the pool
    pub questions: usize,
    /// Number of assigned sessions
    pub active_sessions: usize,
}

/// Health check endpoint
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        questions: state.quiz.pool().len(),
        active_sessions: state.quiz.sessions().len().await,
    })
}

/// Start form. Fields are optional so a missing one maps to a 400.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StartSessionForm {
    pub name: Option<String>,
    pub email: Option<String>,
}

fn required(field: Option<String>, name: &str) -> Result<String, QuizError> {
    field.ok_or_else(|| QuizError::InvalidArgument(format!("{name} is required")))
}

/// Path of the question page for a student id.
fn question_path(student_id: &str) -> String {
    format!("/question/{}", urlencoding::encode(student_id))
}

/// POST /start_session
///
/// Responds `201 Created` with `Location` pointing at the student's question.
pub async fn start_session(
    State(state): State<Arc<AppState>>,
    Form(form): Form<StartSessionForm>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Session>), ServerError> {
    let name = required(form.name, "name")?;
    let email = required(form.email, "email")?;

    let session = state.quiz.start_session(&name, &email).await;
    let location = question_path(&session.student_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(session),
    ))
}

/// GET /question/:student_id
pub async fn get_question(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<String>,
) -> Result<Json<Session>, ServerError> {
    let session = state.quiz.current_question(&student_id).await?;
    Ok(Json(session))
}

/// Answer form
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ResponseForm {
    pub response: Option<String>,
}

/// POST /question/:student_id
pub async fn submit_response(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<String>,
    Form(form): Form<ResponseForm>,
) -> Result<Json<Evaluation>, ServerError> {
    let evaluation = state
        .quiz
        .submit_response(&student_id, form.response.as_deref())
        .await?;
    Ok(Json(evaluation))
}
