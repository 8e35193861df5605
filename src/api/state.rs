//! Application state for shared services

use std::sync::Arc;

use crate::domain::job::{JobId, JobPosting, JobRepository};
use crate::domain::{DescriptionGenerator, DomainError, Identity};
use crate::infrastructure::auth::{AuthService, AuthorizationGate};
use crate::infrastructure::job::{CreateJobRequest, JobService, UpdateJobRequest};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub gate: Arc<AuthorizationGate>,
    pub job_service: Arc<dyn JobServiceTrait>,
    pub description_generator: Arc<dyn DescriptionGenerator>,
}

/// Trait for job service operations
#[async_trait::async_trait]
pub trait JobServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<JobPosting>, DomainError>;
    async fn create(
        &self,
        owner: &Identity,
        request: CreateJobRequest,
    ) -> Result<JobPosting, DomainError>;
    async fn get(&self, id: JobId) -> Result<JobPosting, DomainError>;
    async fn update(&self, id: JobId, request: UpdateJobRequest)
        -> Result<JobPosting, DomainError>;
    async fn delete(&self, id: JobId) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl<R: JobRepository + 'static> JobServiceTrait for JobService<R> {
    async fn list(&self) -> Result<Vec<JobPosting>, DomainError> {
        JobService::list(self).await
    }

    async fn create(
        &self,
        owner: &Identity,
        request: CreateJobRequest,
    ) -> Result<JobPosting, DomainError> {
        JobService::create(self, owner, request).await
    }

    async fn get(&self, id: JobId) -> Result<JobPosting, DomainError> {
        JobService::get(self, id).await
    }

    async fn update(
        &self,
        id: JobId,
        request: UpdateJobRequest,
    ) -> Result<JobPosting, DomainError> {
        JobService::update(self, id, request).await
    }

    async fn delete(&self, id: JobId) -> Result<(), DomainError> {
        JobService::delete(self, id).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        auth_service: Arc<AuthService>,
        job_service: Arc<dyn JobServiceTrait>,
        description_generator: Arc<dyn DescriptionGenerator>,
    ) -> Self {
        let gate = Arc::new(AuthorizationGate::new(auth_service.clone()));

        Self {
            auth_service,
            gate,
            job_service,
            description_generator,
        }
    }
}
