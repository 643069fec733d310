#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod auth_service;
pub mod error;
pub mod quiz_service;
pub mod scoreboard_service;

pub use api::{
    API_BASE_ENV, ApiCall, ApiConfig, DEFAULT_API_BASE, HttpQuizApi, InMemoryQuizApi, QuizApi,
};
pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use error::{ApiError, AppServicesError, AuthError, GenerationError, ScoreboardError};
pub use quiz_service::{GeneratedQuiz, QuizService};
pub use scoreboard_service::ScoreboardService;
