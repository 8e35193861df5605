//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::user::{Email, User, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Email, User>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.email().clone(), user))
            .collect();

        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.contains_key(user.email()) {
            return Err(DomainError::duplicate_identity(format!(
                "User '{}' already exists",
                user.email()
            )));
        }

        users.insert(user.email().clone(), user.clone());
        Ok(user)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.users.read().await.len())
    }
}
