//! Authenticator: registration, login and token verification

use std::sync::Arc;

use metrics::counter;
use tracing::{debug, info, warn};

use super::jwt::{IssuedToken, TokenService};
use crate::domain::user::{Email, User, UserRepository};
use crate::domain::{require_field, DomainError, Identity};
use crate::infrastructure::user::PasswordHasher;

/// Registration input; every field is required
#[derive(Debug, Clone, Default)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// Login input; both fields are required
#[derive(Debug, Clone, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: IssuedToken,
    pub user: User,
}

/// Verifies credentials against the credential store and issues tokens
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Register a new account
    pub async fn register(&self, request: RegisterRequest) -> Result<User, DomainError> {
        let email = Email::new(request.email.as_deref().unwrap_or_default())?;
        let password = require_password(request.password)?;
        let name = require_field("name", request.name.as_deref())?;

        if self.users.email_exists(&email).await? {
            return Err(DomainError::duplicate_identity(format!(
                "User '{}' already exists",
                email
            )));
        }

        let password_hash = self.hasher.hash(&password)?;
        let user = self.users.create(User::new(email, name, password_hash)).await?;

        counter!("job_board_registrations_total").increment(1);
        info!(email = %user.email(), "User registered");

        Ok(user)
    }

    /// Check credentials and issue a signed token
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResult, DomainError> {
        let email = Email::new(request.email.as_deref().unwrap_or_default())?;
        let password = require_password(request.password)?;

        let user = match self.users.get_by_email(&email).await? {
            Some(user) if self.hasher.verify(&password, user.password_hash()) => user,
            _ => {
                counter!("job_board_logins_total", "outcome" => "failure").increment(1);
                warn!(email = %email, "Login rejected");
                return Err(DomainError::InvalidCredentials);
            }
        };

        let token = self.tokens.issue(user.email())?;

        counter!("job_board_logins_total", "outcome" => "success").increment(1);
        info!(email = %user.email(), expires_at = %token.expires_at, "User logged in");

        Ok(LoginResult { token, user })
    }

    /// Resolve the identity carried by a token. Stateless: no store lookup.
    pub fn verify(&self, token: &str) -> Result<Identity, DomainError> {
        let claims = self.tokens.verify(token)?;

        let email = Email::new(claims.subject())
            .map_err(|_| DomainError::invalid_token("Token subject is empty"))?;

        debug!(email = %email, "Token verified");
        Ok(Identity::new(email))
    }

    /// Number of registered accounts
    pub async fn user_count(&self) -> Result<usize, DomainError> {
        self.users.count().await
    }
}

/// Passwords are taken verbatim: only absence or an empty string counts as missing.
fn require_password(password: Option<String>) -> Result<String, DomainError> {
    password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| DomainError::missing_field("password"))
}
