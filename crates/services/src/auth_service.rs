use std::fmt;

use crate::error::AuthError;

/// Identity of the signed-in user, as entered on the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub email: String,
    pub organization: String,
}

/// Single-account login check.
///
/// Compares the submitted pair against one configured account. This gates the
/// UI; it is not an authentication system.
#[derive(Clone)]
pub struct AuthService {
    email: String,
    password: String,
}

impl AuthService {
    pub const DEMO_EMAIL: &'static str = "user@example.com";
    pub const DEMO_PASSWORD: &'static str = "password";

    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// The built-in demo account.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(Self::DEMO_EMAIL, Self::DEMO_PASSWORD)
    }

    #[must_use]
    pub fn account_email(&self) -> &str {
        &self.email
    }

    /// Check credentials and return the user identity for this session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if email or password differ.
    pub fn login(
        &self,
        email: &str,
        password: &str,
        organization: &str,
    ) -> Result<UserInfo, AuthError> {
        let email = email.trim();
        if email != self.email || password != self.password {
            tracing::warn!(email, "login rejected");
            return Err(AuthError::InvalidCredentials);
        }
        tracing::info!(email, organization = organization.trim(), "login accepted");
        Ok(UserInfo {
            email: email.to_string(),
            organization: organization.trim().to_string(),
        })
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::demo()
    }
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthService")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
