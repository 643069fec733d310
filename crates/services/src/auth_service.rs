use std::sync::Arc;

use quiz_core::model::{Credentials, Session, SignupForm};

use crate::api::QuizApi;
use crate::error::AuthError;

/// Login, signup and logout against the auth endpoints.
#[derive(Clone)]
pub struct AuthService {
    api: Arc<dyn QuizApi>,
}

impl AuthService {
    #[must_use]
    pub fn new(api: Arc<dyn QuizApi>) -> Self {
        Self { api }
    }

    /// Exchange credentials for a token and store it in `session`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for any failure, rejected or not;
    /// `session` is left untouched in that case.
    pub async fn login(
        &self,
        session: &mut Session,
        credentials: Credentials,
    ) -> Result<(), AuthError> {
        match self.api.login(&credentials).await {
            Ok(token) => {
                session.set_token(token);
                tracing::info!(email = credentials.email(), "Logged in");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    email = credentials.email(),
                    transport = err.is_transport(),
                    error = %err,
                    "Login failed"
                );
                Err(AuthError::InvalidCredentials(err))
            }
        }
    }

    /// Validate the form locally, then register the account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Signup` for local validation failures (no request is
    /// sent) and `AuthError::SignupRejected` when the server refuses.
    pub async fn signup(&self, form: &SignupForm) -> Result<(), AuthError> {
        let signup = form.validate()?;
        self.api.signup(&signup).await.map_err(|err| {
            tracing::warn!(email = signup.email(), error = %err, "Signup failed");
            AuthError::SignupRejected(err)
        })?;
        tracing::info!(email = signup.email(), "Signed up");
        Ok(())
    }

    /// Forget the token, the quiz and every answer.
    pub fn logout(&self, session: &mut Session) {
        session.reset();
        tracing::info!("Logged out");
    }
}
