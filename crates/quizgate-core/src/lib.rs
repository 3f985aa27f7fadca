//! quizgate-core — Question assignment, heuristic scoring, and sessions.
//!
//! This crate defines the data model, the deterministic assigner, the
//! response scorer and the session store that the server and CLI build on.

pub mod assign;
pub mod config;
pub mod error;
pub mod mersenne;
pub mod model;
pub mod questions;
pub mod scoring;
pub mod service;
pub mod session;
pub mod text;

pub use assign::{Assigner, AssignmentAlgorithm};
pub use config::QuizgateConfig;
pub use error::QuizError;
pub use model::{Assignment, QuestionPool, Session};
pub use scoring::{Evaluation, ScoreBand, Scorer, ScoringConfig};
pub use service::QuizService;
pub use session::{InMemorySessionStore, SessionStore};
pub use text::TextSignals;
