use serde::Serialize;

use crate::domain::user::Email;

/// Caller identity resolved from a verified token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    email: Email,
}

impl Identity {
    pub fn new(email: Email) -> Self {
        Self { email }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

impl From<Email> for Identity {
    fn from(email: Email) -> Self {
        Self::new(email)
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.email)
    }
}
