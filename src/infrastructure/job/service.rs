//! Job service for job posting management

use std::sync::Arc;

use metrics::counter;
use tracing::{debug, info};

use crate::domain::job::{JobChanges, JobId, JobPosting, JobRepository, NewJobPosting};
use crate::domain::{require_field, DomainError, Identity};

/// Request for creating a new job posting
#[derive(Debug, Clone, Default)]
pub struct CreateJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
}

/// Request for updating a job posting
#[derive(Debug, Clone, Default)]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
}

/// Job service for managing job postings
#[derive(Debug)]
pub struct JobService<R: JobRepository> {
    repository: Arc<R>,
}

impl<R: JobRepository> JobService<R> {
    /// Create a new job service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List all postings in creation order
    pub async fn list(&self) -> Result<Vec<JobPosting>, DomainError> {
        self.repository.list().await
    }

    /// Create a posting owned by the caller
    pub async fn create(
        &self,
        owner: &Identity,
        request: CreateJobRequest,
    ) -> Result<JobPosting, DomainError> {
        let title = require_field("title", request.title.as_deref())?;

        let job = self
            .repository
            .insert(NewJobPosting {
                title,
                description: optional_text(request.description),
                company: optional_text(request.company),
                location: optional_text(request.location),
                salary: optional_text(request.salary),
                created_by: owner.email().clone(),
            })
            .await?;

        counter!("job_board_jobs_created_total").increment(1);
        info!(job_id = %job.id(), email = %owner, title = %job.title(), "Job created");

        Ok(job)
    }

    /// Get a posting by id
    pub async fn get(&self, id: JobId) -> Result<JobPosting, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Overwrite the supplied fields of a posting
    pub async fn update(
        &self,
        id: JobId,
        request: UpdateJobRequest,
    ) -> Result<JobPosting, DomainError> {
        let title = match request.title {
            Some(title) => Some(require_field("title", Some(&title))?),
            None => None,
        };

        let changes = JobChanges {
            title,
            description: optional_text(request.description),
            company: optional_text(request.company),
            location: optional_text(request.location),
            salary: optional_text(request.salary),
        };

        if changes.is_empty() {
            debug!(job_id = %id, "Update carries no changes");
        }

        let job = self
            .repository
            .update(id, changes)
            .await?
            .ok_or_else(|| not_found(id))?;

        info!(job_id = %id, "Job updated");
        Ok(job)
    }

    /// Delete a posting
    pub async fn delete(&self, id: JobId) -> Result<(), DomainError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        info!(job_id = %id, "Job deleted");
        Ok(())
    }
}

fn not_found(id: JobId) -> DomainError {
    DomainError::not_found(format!("Job '{}' not found", id))
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
