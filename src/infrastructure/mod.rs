//! Infrastructure layer - Concrete implementations of domain ports

pub mod auth;
pub mod description;
pub mod job;
pub mod logging;
pub mod observability;
pub mod user;
