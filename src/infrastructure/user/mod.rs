//! User infrastructure module
//!
//! Password hashing with Argon2 and the in-memory credential store.

mod password;
mod repository;

pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::InMemoryUserRepository;
