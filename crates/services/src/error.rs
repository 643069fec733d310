//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{GenerationInputError, SignupError};

/// Failures talking to the quiz backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request failed with status {status}")]
    HttpStatus {
        status: reqwest::StatusCode,
        /// `message` field of the error body, when the server sent one.
        message: Option<String>,
    },
    #[error("quiz service unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// True when no authoritative answer came back from the server.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        !matches!(self, ApiError::HttpStatus { .. })
    }

    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::HttpStatus { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    /// Any failed login. Rejections and transport failures read the same to
    /// the user; the cause stays available through `source()`.
    #[error("invalid email or password")]
    InvalidCredentials(#[source] ApiError),
    #[error(transparent)]
    Signup(#[from] SignupError),
    #[error("signup failed")]
    SignupRejected(#[source] ApiError),
}

impl AuthError {
    /// Text shown next to the form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AuthError::InvalidCredentials(_) => "Invalid email or password".to_string(),
            AuthError::Signup(err) => capitalize(&err.to_string()),
            AuthError::SignupRejected(err) if err.is_transport() => {
                "Server error. Try again.".to_string()
            }
            AuthError::SignupRejected(err) => err
                .server_message()
                .map_or_else(|| "Signup failed.".to_string(), str::to_string),
        }
    }
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("enter a topic or upload a PDF")]
    EmptyInput,
    #[error("failed to generate quiz")]
    Failed(#[source] ApiError),
}

impl From<GenerationInputError> for GenerationError {
    fn from(err: GenerationInputError) -> Self {
        match err {
            // Out-of-range counts cannot reach the service; treat them as a failed request.
            GenerationInputError::EmptyInput => GenerationError::EmptyInput,
            other => GenerationError::Failed(ApiError::Unavailable(other.to_string())),
        }
    }
}

/// Errors emitted by `ScoreboardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScoreboardError {
    #[error("not logged in")]
    NotAuthenticated,
    #[error("nothing to record")]
    NothingGraded,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("invalid API base url {raw:?}: {source}")]
    InvalidBaseUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API base url must use http or https: {0}")]
    UnsupportedScheme(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_failures_read_the_same() {
        let rejected = AuthError::InvalidCredentials(ApiError::HttpStatus {
            status: reqwest::StatusCode::UNAUTHORIZED,
            message: Some("Wrong password".into()),
        });
        let offline = AuthError::InvalidCredentials(ApiError::Unavailable("refused".into()));
        assert_eq!(rejected.user_message(), offline.user_message());
        assert_eq!(rejected.to_string(), offline.to_string());
    }

    #[test]
    fn signup_messages() {
        let local = AuthError::Signup(SignupError::InvalidEmail);
        assert_eq!(local.user_message(), "Enter a valid email address");

        let taken = AuthError::SignupRejected(ApiError::HttpStatus {
            status: reqwest::StatusCode::BAD_REQUEST,
            message: Some("Email already exists".into()),
        });
        assert_eq!(taken.user_message(), "Email already exists");

        let offline = AuthError::SignupRejected(ApiError::Unavailable("down".into()));
        assert_eq!(offline.user_message(), "Server error. Try again.");
    }
}
