use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;

use quiz_core::model::{
    AuthToken, Credentials, Question, QuestionCount, ScoreSubmission, ScoreboardEntry, Signup,
    UploadedFile,
};

use super::QuizApi;
use crate::error::ApiError;

/// A request the in-memory backend received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Login { email: String },
    Signup { email: String },
    GenerateFromText { topic: String, count: u8 },
    GenerateFromPdf { file_name: String, count: u8 },
    SaveScore { score: usize, total: usize, topic: String },
    ListScores,
}

#[derive(Default)]
struct State {
    accounts: HashMap<String, (String, AuthToken)>,
    questions: Vec<Question>,
    scoreboard: Vec<ScoreboardEntry>,
    failures: HashMap<&'static str, StatusCode>,
    saved: Vec<ScoreSubmission>,
    calls: Vec<ApiCall>,
}

/// In-process `QuizApi` with scripted responses and a call log.
///
/// Generation endpoints return the first `count` configured questions.
#[derive(Clone, Default)]
pub struct InMemoryQuizApi {
    state: Arc<Mutex<State>>,
}

impl InMemoryQuizApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `email`/`password` and answer with `token`.
    #[must_use]
    pub fn with_account(self, email: &str, password: &str, token: &str) -> Self {
        self.edit(|state| {
            state.accounts.insert(
                email.to_string(),
                (password.to_string(), AuthToken::new(token)),
            );
        });
        self
    }

    #[must_use]
    pub fn with_questions(self, questions: Vec<Question>) -> Self {
        self.edit(|state| state.questions = questions);
        self
    }

    #[must_use]
    pub fn with_scoreboard(self, entries: Vec<ScoreboardEntry>) -> Self {
        self.edit(|state| state.scoreboard = entries);
        self
    }

    /// Make `endpoint` (e.g. `"auth/login"`) answer with `status`.
    #[must_use]
    pub fn failing(self, endpoint: &'static str, status: StatusCode) -> Self {
        self.edit(|state| {
            state.failures.insert(endpoint, status);
        });
        self
    }

    #[must_use]
    pub fn calls(&self) -> Vec<ApiCall> {
        self.read(|state| state.calls.clone())
    }

    #[must_use]
    pub fn saved_scores(&self) -> Vec<ScoreSubmission> {
        self.read(|state| state.saved.clone())
    }

    fn edit(&self, apply: impl FnOnce(&mut State)) {
        if let Ok(mut guard) = self.state.lock() {
            apply(&mut guard);
        }
    }

    fn read<T: Default>(&self, view: impl FnOnce(&State) -> T) -> T {
        self.state.lock().map(|guard| view(&guard)).unwrap_or_default()
    }

    fn record(&self, endpoint: &'static str, call: ApiCall) -> Result<(), ApiError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|e| ApiError::Unavailable(e.to_string()))?;
        guard.calls.push(call);
        match guard.failures.get(endpoint) {
            Some(status) => Err(ApiError::HttpStatus {
                status: *status,
                message: None,
            }),
            None => Ok(()),
        }
    }

    fn take_questions(&self, count: QuestionCount) -> Result<Vec<Question>, ApiError> {
        let guard = self
            .state
            .lock()
            .map_err(|e| ApiError::Unavailable(e.to_string()))?;
        Ok(guard
            .questions
            .iter()
            .take(usize::from(count.value()))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl QuizApi for InMemoryQuizApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        self.record(
            "auth/login",
            ApiCall::Login {
                email: credentials.email().to_string(),
            },
        )?;
        let guard = self
            .state
            .lock()
            .map_err(|e| ApiError::Unavailable(e.to_string()))?;
        match guard.accounts.get(credentials.email()) {
            Some((password, token)) if password == credentials.password() => Ok(token.clone()),
            Some(_) => Err(ApiError::HttpStatus {
                status: StatusCode::BAD_REQUEST,
                message: Some("Wrong password".into()),
            }),
            None => Err(ApiError::HttpStatus {
                status: StatusCode::BAD_REQUEST,
                message: Some("User not found".into()),
            }),
        }
    }

    async fn signup(&self, signup: &Signup) -> Result<(), ApiError> {
        self.record(
            "auth/signup",
            ApiCall::Signup {
                email: signup.email().to_string(),
            },
        )?;
        let mut guard = self
            .state
            .lock()
            .map_err(|e| ApiError::Unavailable(e.to_string()))?;
        if guard.accounts.contains_key(signup.email()) {
            return Err(ApiError::HttpStatus {
                status: StatusCode::BAD_REQUEST,
                message: Some("Email already exists".into()),
            });
        }
        let token = AuthToken::new(format!("token-{}", guard.accounts.len() + 1));
        guard.accounts.insert(
            signup.email().to_string(),
            (signup.password().to_string(), token),
        );
        Ok(())
    }

    async fn generate_from_text(
        &self,
        topic: &str,
        count: QuestionCount,
    ) -> Result<Vec<Question>, ApiError> {
        self.record(
            "api/generate-from-text",
            ApiCall::GenerateFromText {
                topic: topic.to_string(),
                count: count.value(),
            },
        )?;
        self.take_questions(count)
    }

    async fn generate_from_pdf(
        &self,
        file: &UploadedFile,
        count: QuestionCount,
    ) -> Result<Vec<Question>, ApiError> {
        self.record(
            "api/generate-from-pdf",
            ApiCall::GenerateFromPdf {
                file_name: file.name().to_string(),
                count: count.value(),
            },
        )?;
        self.take_questions(count)
    }

    async fn save_score(
        &self,
        _token: &AuthToken,
        submission: &ScoreSubmission,
    ) -> Result<(), ApiError> {
        self.record(
            "scoreboard/save",
            ApiCall::SaveScore {
                score: submission.score,
                total: submission.total,
                topic: submission.topic.clone(),
            },
        )?;
        self.edit(|state| state.saved.push(submission.clone()));
        Ok(())
    }

    async fn list_scores(&self) -> Result<Vec<ScoreboardEntry>, ApiError> {
        self.record("scoreboard/all", ApiCall::ListScores)?;
        Ok(self.read(|state| state.scoreboard.clone()))
    }
}
