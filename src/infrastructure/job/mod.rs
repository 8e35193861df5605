//! Job posting infrastructure module

mod repository;
mod service;

pub use repository::InMemoryJobRepository;
pub use service::{CreateJobRequest, JobService, UpdateJobRequest};
