use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use quiz_core::model::{
    AuthToken, Credentials, Question, QuestionCount, ScoreSubmission, ScoreboardEntry, Signup,
    UploadedFile,
};

use super::QuizApi;
use crate::error::{ApiError, AppServicesError};

pub const API_BASE_ENV: &str = "INTELLIQUIZ_API_BASE";
pub const DEFAULT_API_BASE: &str = "http://localhost:4000";

// Generation waits on an LLM upstream.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// # Errors
    ///
    /// Returns `AppServicesError` if `raw` is not an absolute http(s) url.
    pub fn new(raw: &str) -> Result<Self, AppServicesError> {
        let base_url = Url::parse(raw.trim()).map_err(|source| AppServicesError::InvalidBaseUrl {
            raw: raw.to_string(),
            source,
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(AppServicesError::UnsupportedScheme(raw.to_string()));
        }
        Ok(Self { base_url })
    }

    /// Read `INTELLIQUIZ_API_BASE`, falling back to the local dev backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the variable holds an invalid url.
    pub fn from_env() -> Result<Self, AppServicesError> {
        match env::var(API_BASE_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Self::new(&raw),
            _ => Self::new(DEFAULT_API_BASE),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// `QuizApi` over HTTP with a single shared `reqwest` client.
#[derive(Clone)]
pub struct HttpQuizApi {
    client: Client,
    config: ApiConfig,
}

impl HttpQuizApi {
    /// # Errors
    ///
    /// Returns `AppServicesError::Http` if the TLS backend cannot be initialised.
    pub fn new(config: ApiConfig) -> Result<Self, AppServicesError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait]
impl QuizApi for HttpQuizApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        let response = self
            .client
            .post(self.config.endpoint("auth/login"))
            .json(credentials)
            .send()
            .await?;
        let body: LoginResponse = ensure_success(response).await?.json().await?;
        Ok(AuthToken::new(body.token))
    }

    async fn signup(&self, signup: &Signup) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.config.endpoint("auth/signup"))
            .json(signup)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn generate_from_text(
        &self,
        topic: &str,
        count: QuestionCount,
    ) -> Result<Vec<Question>, ApiError> {
        let payload = TextGenerationRequest {
            topic,
            num_questions: count,
        };
        let response = self
            .client
            .post(self.config.endpoint("api/generate-from-text"))
            .json(&payload)
            .send()
            .await?;
        let body: QuizResponse = ensure_success(response).await?.json().await?;
        Ok(body.questions)
    }

    async fn generate_from_pdf(
        &self,
        file: &UploadedFile,
        count: QuestionCount,
    ) -> Result<Vec<Question>, ApiError> {
        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.name().to_string())
            .mime_str("application/pdf")?;
        let form = Form::new()
            .part("file", part)
            .text("num_questions", count.to_string());

        let response = self
            .client
            .post(self.config.endpoint("api/generate-from-pdf"))
            .multipart(form)
            .send()
            .await?;
        let body: QuizResponse = ensure_success(response).await?.json().await?;
        Ok(body.questions)
    }

    async fn save_score(
        &self,
        token: &AuthToken,
        submission: &ScoreSubmission,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.config.endpoint("scoreboard/save"))
            .bearer_auth(token.as_str())
            .json(submission)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn list_scores(&self) -> Result<Vec<ScoreboardEntry>, ApiError> {
        let response = self
            .client
            .get(self.config.endpoint("scoreboard/all"))
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }
}

/// Only a plain 200 counts as success; every other status carries the
/// body's `message` (or `error`) when there is one.
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message.or(body.error));
    Err(ApiError::HttpStatus { status, message })
}

#[derive(Debug, Serialize)]
struct TextGenerationRequest<'a> {
    topic: &'a str,
    num_questions: QuestionCount,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct QuizResponse {
    questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}
