//! User domain
//!
//! Account records and the credential store trait.

mod entity;
mod repository;

pub use entity::{Email, User};
pub use repository::UserRepository;
