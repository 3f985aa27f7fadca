//! HTTP server module

mod api;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::AppState;

pub use api::{HealthResponse, ResponseForm, StartSessionForm};

/// Create the HTTP router with all routes configured
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(api::health))
        .route("/start_session", post(api::start_session))
        .route(
            "/question/:student_id",
            get(api::get_question).post(api::submit_response),
        )
        .with_state(state)
}
