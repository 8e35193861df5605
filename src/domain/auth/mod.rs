//! Authentication domain
//!
//! Resolved caller identities and the operations they may be gated on.

mod identity;
mod operation;

pub use identity::Identity;
pub use operation::Operation;
