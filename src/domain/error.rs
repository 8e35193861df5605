use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Identity already exists: {message}")]
    DuplicateIdentity { message: String },

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token: {message}")]
    InvalidToken { message: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn duplicate_identity(message: impl Into<String>) -> Self {
        Self::DuplicateIdentity {
            message: message.into(),
        }
    }

    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::InvalidToken {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Stable machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::DuplicateIdentity { .. } => "duplicate_identity",
            Self::InvalidCredentials => "invalid_credentials",
            Self::InvalidToken { .. } => "invalid_token",
            Self::Unauthorized { .. } => "unauthorized",
            Self::NotFound { .. } => "not_found",
            Self::Provider { .. } => "provider_error",
            Self::Internal { .. } => "internal_error",
        }
    }
}

/// Return the trimmed value of a required text field, or `MissingField`
/// when it is absent or blank.
pub fn require_field(field: &str, value: Option<&str>) -> Result<String, DomainError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(DomainError::missing_field(field)),
    }
}
