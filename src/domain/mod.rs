//! Domain layer - Core business logic and entities

pub mod auth;
pub mod clock;
pub mod description;
pub mod error;
pub mod job;
pub mod user;

pub use auth::{Identity, Operation};
pub use clock::{Clock, ManualClock, SystemClock};
pub use description::{DescriptionGenerator, DescriptionRequest, JobBrief};
pub use error::{require_field, DomainError};
pub use job::{JobChanges, JobId, JobPosting, JobRepository, NewJobPosting};
pub use user::{Email, User, UserRepository};
