use std::sync::Arc;

use crate::api::{ApiConfig, HttpQuizApi, QuizApi};
use crate::auth_service::AuthService;
use crate::error::AppServicesError;
use crate::quiz_service::QuizService;
use crate::scoreboard_service::ScoreboardService;

/// Assembles app-facing services over one backend.
#[derive(Clone)]
pub struct AppServices {
    auth: Arc<AuthService>,
    quiz: Arc<QuizService>,
    scoreboard: Arc<ScoreboardService>,
}

impl AppServices {
    #[must_use]
    pub fn new(api: Arc<dyn QuizApi>) -> Self {
        Self {
            auth: Arc::new(AuthService::new(Arc::clone(&api))),
            quiz: Arc::new(QuizService::new(Arc::clone(&api))),
            scoreboard: Arc::new(ScoreboardService::new(api)),
        }
    }

    /// Build services talking to the HTTP backend at `config`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Http` if the HTTP client cannot be built.
    pub fn http(config: ApiConfig) -> Result<Self, AppServicesError> {
        tracing::info!(base_url = %config.base_url(), "Using quiz backend");
        Ok(Self::new(Arc::new(HttpQuizApi::new(config)?)))
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn scoreboard(&self) -> Arc<ScoreboardService> {
        Arc::clone(&self.scoreboard)
    }
}
