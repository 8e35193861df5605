//! Authentication API endpoints
//!
//! Registration, login and the current caller's identity.

use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::User;
use crate::infrastructure::auth::{LoginRequest, RegisterRequest};

/// Registration body
#[derive(Debug, Default, Deserialize)]
pub struct RegisterBody {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// Login body
#[derive(Debug, Default, Deserialize)]
pub struct LoginBody {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Public view of an account
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub email: String,
    pub name: String,
}

impl UserResponse {
    fn from_user(user: &User) -> Self {
        Self {
            email: user.email().to_string(),
            name: user.name().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_at: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub email: String,
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let user = state
        .auth_service
        .register(RegisterRequest {
            email: body.email,
            password: body.password,
            name: body.name,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user: UserResponse::from_user(&user),
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<LoginResponse>, ApiError> {
    let result = state
        .auth_service
        .login(LoginRequest {
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        access_token: result.token.token,
        token_type: "Bearer",
        expires_at: result.token.expires_at.to_rfc3339(),
        user: UserResponse::from_user(&result.user),
    }))
}

/// GET /api/auth/me
pub async fn current_user(RequireUser(identity): RequireUser) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse {
        email: identity.email().to_string(),
    })
}
