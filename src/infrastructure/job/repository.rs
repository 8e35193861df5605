//! In-memory job repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::job::{JobChanges, JobId, JobPosting, JobRepository, NewJobPosting};
use crate::domain::DomainError;

#[derive(Debug)]
struct JobTable {
    /// Next id to hand out; only ever increases
    next_id: u64,
    jobs: BTreeMap<JobId, JobPosting>,
}

impl Default for JobTable {
    fn default() -> Self {
        Self {
            next_id: 1,
            jobs: BTreeMap::new(),
        }
    }
}

/// In-memory implementation of JobRepository.
///
/// The id counter and the postings sit behind one lock, so id assignment and
/// insertion happen as a single step. Ids are ordered, which keeps listing in
/// creation order.
#[derive(Debug, Default)]
pub struct InMemoryJobRepository {
    table: RwLock<JobTable>,
}

impl InMemoryJobRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn list(&self) -> Result<Vec<JobPosting>, DomainError> {
        let table = self.table.read().await;
        Ok(table.jobs.values().cloned().collect())
    }

    async fn insert(&self, job: NewJobPosting) -> Result<JobPosting, DomainError> {
        let mut table = self.table.write().await;

        let id = JobId::new(table.next_id);
        table.next_id = table
            .next_id
            .checked_add(1)
            .ok_or_else(|| DomainError::internal("Job id space exhausted"))?;

        let posting = JobPosting::create(id, job);
        table.jobs.insert(id, posting.clone());

        Ok(posting)
    }

    async fn get(&self, id: JobId) -> Result<Option<JobPosting>, DomainError> {
        let table = self.table.read().await;
        Ok(table.jobs.get(&id).cloned())
    }

    async fn update(
        &self,
        id: JobId,
        changes: JobChanges,
    ) -> Result<Option<JobPosting>, DomainError> {
        let mut table = self.table.write().await;

        Ok(table.jobs.get_mut(&id).map(|job| {
            job.apply(changes);
            job.clone()
        }))
    }

    async fn delete(&self, id: JobId) -> Result<bool, DomainError> {
        let mut table = self.table.write().await;
        Ok(table.jobs.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::Email;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn new_job(title: &str) -> NewJobPosting {
        NewJobPosting {
            title: title.to_string(),
            description: None,
            company: None,
            location: None,
            salary: None,
            created_by: Email::new("a@x.com").unwrap(),
        }
    }

    #[tokio::test]
    async fn test_ids_start_at_one() {
        let repo = InMemoryJobRepository::new();

        let first = repo.insert(new_job("First")).await.unwrap();
        let second = repo.insert(new_job("Second")).await.unwrap();

        assert_eq!(first.id(), JobId::new(1));
        assert_eq!(second.id(), JobId::new(2));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryJobRepository::new();

        repo.insert(new_job("First")).await.unwrap();
        let second = repo.insert(new_job("Second")).await.unwrap();
        assert!(repo.delete(second.id()).await.unwrap());

        let third = repo.insert(new_job("Third")).await.unwrap();
        assert_eq!(third.id(), JobId::new(3));
    }

    #[tokio::test]
    async fn test_list_in_creation_order() {
        let repo = InMemoryJobRepository::new();
        for title in ["A", "B", "C"] {
            repo.insert(new_job(title)).await.unwrap();
        }
        repo.delete(JobId::new(2)).await.unwrap();

        let titles: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|j| j.title().to_string())
            .collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryJobRepository::new();

        let result = repo
            .update(
                JobId::new(42),
                JobChanges {
                    title: Some("X".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(!repo.delete(JobId::new(42)).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_applies_changes() {
        let repo = InMemoryJobRepository::new();
        let job = repo.insert(new_job("Engineer")).await.unwrap();

        let updated = repo
            .update(
                job.id(),
                JobChanges {
                    location: Some("Remote".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title(), "Engineer");
        assert_eq!(updated.location(), Some("Remote"));
        assert_eq!(repo.get(job.id()).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_concurrent_inserts_get_distinct_ids() {
        let repo = Arc::new(InMemoryJobRepository::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.insert(new_job(&format!("Job {i}"))).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let job = handle.await.unwrap().unwrap();
            ids.insert(job.id().value());
        }

        assert_eq!(ids.len(), 32);
        assert_eq!(ids, (1..=32).collect::<HashSet<u64>>());
    }
}
