//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::{require_field, DomainError};

/// Email address used as the unique, case-sensitive account key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Create an email key; surrounding whitespace is dropped and a blank
    /// value is reported as a missing `email` field.
    pub fn new(value: impl AsRef<str>) -> Result<Self, DomainError> {
        require_field("email", Some(value.as_ref())).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registered account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    email: Email,
    name: String,
    /// Argon2 PHC string - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: Email, name: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email,
            name: name.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
