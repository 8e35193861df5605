//! API error envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Broad error category reported in the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    AuthenticationError,
    NotFoundError,
    ServerError,
    ServiceUnavailableError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::AuthenticationError => write!(f, "authentication_error"),
            Self::NotFoundError => write!(f, "not_found_error"),
            Self::ServerError => write!(f, "server_error"),
            Self::ServiceUnavailableError => write!(f, "service_unavailable_error"),
        }
    }
}

/// `{"error": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    /// Stable machine-readable error kind
    pub code: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(
        status: StatusCode,
        error_type: ApiErrorType,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    code: code.into(),
                },
            },
        }
    }

    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidRequestError, code, message)
    }

    pub fn unauthorized(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, ApiErrorType::AuthenticationError, code, message)
    }

    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::NotFoundError, code, message)
    }

    pub fn internal(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiErrorType::ServerError, code, message)
    }

    pub fn unavailable(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            ApiErrorType::ServiceUnavailableError,
            code,
            message,
        )
    }

    pub fn code(&self) -> &str {
        &self.response.error.code
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let code = err.kind();

        match &err {
            DomainError::MissingField { .. } | DomainError::DuplicateIdentity { .. } => {
                Self::bad_request(code, err.to_string())
            }
            DomainError::InvalidCredentials
            | DomainError::InvalidToken { .. }
            | DomainError::Unauthorized { .. } => Self::unauthorized(code, err.to_string()),
            DomainError::NotFound { message } => Self::not_found(code, message),
            DomainError::Provider { .. } => Self::unavailable(code, err.to_string()),
            DomainError::Internal { message } => {
                tracing::error!(error = %message, "Internal error");
                Self::internal(code, "Internal server error")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_status_mapping() {
        let cases = [
            (DomainError::missing_field("title"), StatusCode::BAD_REQUEST),
            (DomainError::duplicate_identity("exists"), StatusCode::BAD_REQUEST),
            (DomainError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (DomainError::invalid_token("expired"), StatusCode::UNAUTHORIZED),
            (DomainError::unauthorized("no token"), StatusCode::UNAUTHORIZED),
            (DomainError::not_found("Job '1' not found"), StatusCode::NOT_FOUND),
            (DomainError::provider("openai", "down"), StatusCode::SERVICE_UNAVAILABLE),
            (DomainError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (domain, status) in cases {
            let kind = domain.kind();
            let api: ApiError = domain.into();
            assert_eq!(api.status, status, "{kind}");
            assert_eq!(api.code(), kind);
        }
    }

    #[test]
    fn test_internal_details_not_exposed() {
        let api: ApiError = DomainError::internal("argon2 params broke").into();
        assert_eq!(api.response.error.message, "Internal server error");
    }

    #[test]
    fn test_error_serialization() {
        let api: ApiError = DomainError::missing_field("email").into();
        let json = serde_json::to_value(&api.response).unwrap();

        assert_eq!(json["error"]["type"], "invalid_request_error");
        assert_eq!(json["error"]["code"], "missing_field");
        assert_eq!(json["error"]["message"], "Missing required field: email");
    }
}
