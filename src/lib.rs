//! Job Board API
//!
//! Backend for a job posting board:
//! - Account registration and login with signed, expiring bearer tokens
//! - An authorization gate in front of every non-public operation
//! - Job posting CRUD with sequential, never-reused ids
//! - Job description generation (template, or an OpenAI-compatible backend)

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::{
    auth::{AuthService, JwtService},
    description::DescriptionGeneratorFactory,
    job::{InMemoryJobRepository, JobService},
    user::{Argon2Hasher, InMemoryUserRepository},
};
use tracing::{info, warn};

/// Create the application state with default configuration
pub fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default())
}

/// Create the application state with custom configuration
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let jwt_config = config.auth.jwt_config();
    if jwt_config.uses_development_secret() {
        warn!(
            "Using the built-in development JWT secret; set JWT_SECRET_KEY or APP__AUTH__JWT_SECRET"
        );
    }

    let auth_service = Arc::new(AuthService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(Argon2Hasher::new()),
        Arc::new(JwtService::new(jwt_config)),
    ));

    let job_service = Arc::new(JobService::new(Arc::new(InMemoryJobRepository::new())));

    let description_generator = DescriptionGeneratorFactory::create(&config.generator)
        .map_err(|e| anyhow::anyhow!("Failed to create description generator: {}", e))?;

    info!(
        generator = description_generator.name(),
        token_ttl_secs = config.auth.token_ttl_secs,
        "Application state initialized"
    );

    Ok(AppState::new(auth_service, job_service, description_generator))
}
