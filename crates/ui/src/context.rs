use std::sync::Arc;

use services::{AuthService, QuizService, ScoreboardService};

pub trait UiApp: Send + Sync {
    fn auth_service(&self) -> Arc<AuthService>;
    fn quiz_service(&self) -> Arc<QuizService>;
    fn scoreboard_service(&self) -> Arc<ScoreboardService>;

    /// Shown under the login form so users know which backend they talk to.
    fn backend_label(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    auth: Arc<AuthService>,
    quiz: Arc<QuizService>,
    scoreboard: Arc<ScoreboardService>,
    backend_label: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            auth: app.auth_service(),
            quiz: app.quiz_service(),
            scoreboard: app.scoreboard_service(),
            backend_label: app.backend_label(),
        }
    }

    #[must_use]
    pub fn auth_service(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn scoreboard_service(&self) -> Arc<ScoreboardService> {
        Arc::clone(&self.scoreboard)
    }

    #[must_use]
    pub fn backend_label(&self) -> &str {
        &self.backend_label
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
