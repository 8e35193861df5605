//! Job repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{JobChanges, JobId, JobPosting, NewJobPosting};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Store of job postings.
///
/// Implementations own identity assignment: ids start at 1, increase
/// monotonically and are never reused, even after a delete. All mutations
/// must be serialized against each other.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait JobRepository: Send + Sync + Debug {
    /// All postings in creation order
    async fn list(&self) -> Result<Vec<JobPosting>, DomainError>;

    /// Assign the next id and store the posting
    async fn insert(&self, job: NewJobPosting) -> Result<JobPosting, DomainError>;

    /// Get a posting by id
    async fn get(&self, id: JobId) -> Result<Option<JobPosting>, DomainError>;

    /// Apply changes to an existing posting; `None` if it does not exist
    async fn update(
        &self,
        id: JobId,
        changes: JobChanges,
    ) -> Result<Option<JobPosting>, DomainError>;

    /// Remove a posting; `false` if it did not exist
    async fn delete(&self, id: JobId) -> Result<bool, DomainError>;
}
