//! JWT token issuance and verification

use std::fmt::Debug;
use std::sync::Arc;

use chrono::{DateTime, Duration, Timelike, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::user::Email;
use crate::domain::{Clock, DomainError, SystemClock};

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (account email)
    pub sub: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

impl JwtClaims {
    /// Create new claims for an account
    pub fn new(email: &Email, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: email.as_str().to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    /// A token is only valid strictly before its expiry instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    pub fn subject(&self) -> &str {
        &self.sub
    }
}

/// Configuration for JWT service
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC secret for signing tokens
    pub secret: String,
    /// Token lifetime in seconds
    pub ttl_secs: u64,
}

impl JwtConfig {
    pub const DEVELOPMENT_SECRET: &'static str = "change-me-in-production";

    /// Upper bound on the configured lifetime (one year)
    pub const MAX_TTL_SECS: u64 = 365 * 24 * 3600;

    pub fn new(secret: impl Into<String>, ttl_secs: u64) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs,
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::seconds(self.ttl_secs.min(Self::MAX_TTL_SECS) as i64)
    }

    pub fn uses_development_secret(&self) -> bool {
        self.secret == Self::DEVELOPMENT_SECRET
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: Self::DEVELOPMENT_SECRET.to_string(),
            ttl_secs: 3600,
        }
    }
}

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Signs and verifies bearer tokens
pub trait TokenService: Send + Sync + Debug {
    /// Sign a token for an account
    fn issue(&self, email: &Email) -> Result<IssuedToken, DomainError>;

    /// Verify signature and expiry, returning the claims
    fn verify(&self, token: &str) -> Result<JwtClaims, DomainError>;

    /// Token lifetime
    fn ttl(&self) -> Duration;
}

/// HS256 JWT service checking expiry against an injected clock
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("ttl_secs", &self.config.ttl_secs)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .field("clock", &self.clock)
            .finish()
    }
}

impl JwtService {
    /// Create a JWT service using the system clock
    pub fn new(config: JwtConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: JwtConfig, clock: Arc<dyn Clock>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        // Expiry is checked against `clock`, not the library's wall clock.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            clock,
        }
    }
}

impl TokenService for JwtService {
    fn issue(&self, email: &Email) -> Result<IssuedToken, DomainError> {
        let now = self.clock.now();
        let issued_at = now.with_nanosecond(0).unwrap_or(now);
        let claims = JwtClaims::new(email, issued_at, self.config.ttl());

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to sign token: {}", e)))?;

        Ok(IssuedToken {
            token,
            issued_at,
            expires_at: issued_at + self.config.ttl(),
        })
    }

    fn verify(&self, token: &str) -> Result<JwtClaims, DomainError> {
        let token_data = decode::<JwtClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| DomainError::invalid_token(e.to_string()))?;

        let claims = token_data.claims;

        if claims.is_expired_at(self.clock.now()) {
            return Err(DomainError::invalid_token("Token has expired"));
        }

        Ok(claims)
    }

    fn ttl(&self) -> Duration {
        self.config.ttl()
    }
}
