//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Email, User};
use crate::domain::DomainError;

/// Credential store
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by email
    async fn get_by_email(&self, email: &Email) -> Result<Option<User>, DomainError>;

    /// Insert a new user. Fails with `DuplicateIdentity` if the email is
    /// already taken; the check and the insert are a single atomic step.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Number of registered users
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if an email is registered
    async fn email_exists(&self, email: &Email) -> Result<bool, DomainError> {
        Ok(self.get_by_email(email).await?.is_some())
    }
}
