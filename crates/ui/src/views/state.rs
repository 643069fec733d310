use dioxus::prelude::*;
use services::{AuthError, GenerationError};

/// User-facing failure shown next to the control that triggered it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    InvalidCredentials,
    EmptyInput,
    GenerationFailed,
    Signup(String),
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ViewError::InvalidCredentials => "Invalid email or password",
            ViewError::EmptyInput => "Enter topic or upload a PDF",
            ViewError::GenerationFailed => "Failed to generate quiz",
            ViewError::Signup(message) => message,
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }

    /// Warnings are shown softer than errors.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, ViewError::EmptyInput)
    }
}

impl From<&AuthError> for ViewError {
    fn from(err: &AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials(_) => ViewError::InvalidCredentials,
            other => ViewError::Signup(other.user_message()),
        }
    }
}

impl From<&GenerationError> for ViewError {
    fn from(err: &GenerationError) -> Self {
        match err {
            GenerationError::EmptyInput => ViewError::EmptyInput,
            _ => ViewError::GenerationFailed,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use services::{ApiError, AuthError, GenerationError};

    use super::ViewError;

    #[test]
    fn generation_errors_map_to_fixed_messages() {
        let empty = ViewError::from(&GenerationError::EmptyInput);
        assert_eq!(empty.message(), "Enter topic or upload a PDF");
        assert!(empty.is_warning());

        let failed = ViewError::from(&GenerationError::Failed(ApiError::Unavailable(
            "connection refused".into(),
        )));
        assert_eq!(failed.message(), "Failed to generate quiz");
    }

    #[test]
    fn login_errors_hide_cause() {
        let err = AuthError::InvalidCredentials(ApiError::Unavailable("connection refused".into()));
        let view = ViewError::from(&err);
        assert_eq!(view, ViewError::InvalidCredentials);
        assert_eq!(view.message(), "Invalid email or password");
    }
}
