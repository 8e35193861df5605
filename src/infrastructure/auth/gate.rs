//! Authorization gate in front of every protected operation

use std::sync::Arc;

use tracing::debug;

use super::service::AuthService;
use crate::domain::{DomainError, Identity, Operation};

/// Decides whether a caller may perform an operation.
///
/// Public operations (health, register, login) are admitted without a token
/// and carry no identity. Every other operation needs a bearer token that
/// verifies; the caller's identity is handed on to the operation.
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    authenticator: Arc<AuthService>,
}

impl AuthorizationGate {
    pub fn new(authenticator: Arc<AuthService>) -> Self {
        Self { authenticator }
    }

    /// Whether an operation may run without a token
    pub fn is_public(operation: Operation) -> bool {
        !operation.requires_authentication()
    }

    pub fn authorize(
        &self,
        token: Option<&str>,
        operation: Operation,
    ) -> Result<Option<Identity>, DomainError> {
        if Self::is_public(operation) {
            return Ok(None);
        }

        let token = token.map(str::trim).filter(|t| !t.is_empty()).ok_or_else(|| {
            DomainError::unauthorized(format!("Authentication required for {}", operation))
        })?;

        let identity = self.authenticator.verify(token)?;

        debug!(operation = %operation, caller = %identity, "Operation authorized");
        Ok(Some(identity))
    }
}
