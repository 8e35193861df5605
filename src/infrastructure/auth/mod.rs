//! Authentication infrastructure module
//!
//! Token signing, the authenticator and the authorization gate.

mod gate;
mod jwt;
mod service;

pub use gate::AuthorizationGate;
pub use jwt::{IssuedToken, JwtClaims, JwtConfig, JwtService, TokenService};
pub use service::{AuthService, LoginRequest, LoginResult, RegisterRequest};
