use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Local validation failures for the signup form.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SignupError {
    #[error("all fields are required")]
    MissingFields,

    #[error("name must be at least {min} characters")]
    NameTooShort { min: usize },

    #[error("enter a valid email address")]
    InvalidEmail,

    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

//
// ─── CREDENTIALS ──────────────────────────────────────────────────────────────
//

/// Email and password for one login attempt. Never stored.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

//
// ─── TOKEN ────────────────────────────────────────────────────────────────────
//

/// Opaque bearer token returned by the login endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

//
// ─── SIGNUP ───────────────────────────────────────────────────────────────────
//

/// Raw signup input as typed by the user.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A signup form that passed local validation. Fields are trimmed.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Signup {
    name: String,
    email: String,
    password: String,
}

impl fmt::Debug for Signup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signup")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl Signup {
    pub const MIN_NAME_LEN: usize = 2;
    pub const MIN_PASSWORD_LEN: usize = 6;

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl SignupForm {
    /// Validate and trim the form.
    ///
    /// # Errors
    ///
    /// Returns the first `SignupError` found, checking presence, name length,
    /// email shape and password length in that order.
    pub fn validate(&self) -> Result<Signup, SignupError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let password = self.password.trim();

        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(SignupError::MissingFields);
        }
        if name.chars().count() < Signup::MIN_NAME_LEN {
            return Err(SignupError::NameTooShort {
                min: Signup::MIN_NAME_LEN,
            });
        }
        if !looks_like_email(email) {
            return Err(SignupError::InvalidEmail);
        }
        if password.chars().count() < Signup::MIN_PASSWORD_LEN {
            return Err(SignupError::PasswordTooShort {
                min: Signup::MIN_PASSWORD_LEN,
            });
        }

        Ok(Signup {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, password: &str) -> SignupForm {
        SignupForm {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn debug_output_hides_secrets() {
        let credentials = Credentials::new("a@b.com", "hunter22");
        let token = AuthToken::new("abc");
        assert!(!format!("{credentials:?}").contains("hunter22"));
        assert!(!format!("{token:?}").contains("abc"));
    }

    #[test]
    fn signup_requires_every_field() {
        let err = form("Ada", "  ", "secret1").validate().unwrap_err();
        assert_eq!(err, SignupError::MissingFields);
    }

    #[test]
    fn signup_rejects_short_name_and_password() {
        let err = form("A", "a@b.com", "secret1").validate().unwrap_err();
        assert_eq!(err, SignupError::NameTooShort { min: 2 });

        let err = form("Ada", "a@b.com", "12345").validate().unwrap_err();
        assert_eq!(err, SignupError::PasswordTooShort { min: 6 });
    }

    #[test]
    fn signup_checks_email_shape() {
        for bad in ["ada", "ada@", "@b.com", "ada@b", "ada@b.", "a da@b.com", "a@b@c.com"] {
            let err = form("Ada", bad, "secret1").validate().unwrap_err();
            assert_eq!(err, SignupError::InvalidEmail, "{bad}");
        }
    }

    #[test]
    fn signup_trims_fields() {
        let signup = form(" Ada ", " ada@example.com ", " secret1 ")
            .validate()
            .unwrap();
        assert_eq!(signup.name(), "Ada");
        assert_eq!(signup.email(), "ada@example.com");
        assert_eq!(signup.password(), "secret1");
    }
}
