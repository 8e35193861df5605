//! Job posting domain

mod entity;
mod repository;

pub use entity::{JobChanges, JobId, JobPosting, NewJobPosting};
pub use repository::JobRepository;

#[cfg(test)]
pub use repository::MockJobRepository;
