mod http;
mod in_memory;

use async_trait::async_trait;

use quiz_core::model::{
    AuthToken, Credentials, Question, QuestionCount, ScoreSubmission, ScoreboardEntry, Signup,
    UploadedFile,
};

use crate::error::ApiError;

pub use http::{API_BASE_ENV, ApiConfig, DEFAULT_API_BASE, HttpQuizApi};
pub use in_memory::{ApiCall, InMemoryQuizApi};

/// The remote quiz backend, one method per endpoint.
///
/// Implementations report any non-success status as `ApiError::HttpStatus`.
#[async_trait]
pub trait QuizApi: Send + Sync {
    /// `POST /auth/login`
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError>;

    /// `POST /auth/signup`
    async fn signup(&self, signup: &Signup) -> Result<(), ApiError>;

    /// `POST /api/generate-from-text`
    async fn generate_from_text(
        &self,
        topic: &str,
        count: QuestionCount,
    ) -> Result<Vec<Question>, ApiError>;

    /// `POST /api/generate-from-pdf` (multipart)
    async fn generate_from_pdf(
        &self,
        file: &UploadedFile,
        count: QuestionCount,
    ) -> Result<Vec<Question>, ApiError>;

    /// `POST /scoreboard/save`
    async fn save_score(
        &self,
        token: &AuthToken,
        submission: &ScoreSubmission,
    ) -> Result<(), ApiError>;

    /// `GET /scoreboard/all`
    async fn list_scores(&self) -> Result<Vec<ScoreboardEntry>, ApiError>;
}
