//! Token issuer trait

use chrono::{DateTime, Utc};
use std::fmt::Debug;

use super::claims::{ClaimName, ClaimValue, SessionClaims};
use crate::domain::user::User;
use crate::domain::TokenError;

/// Issues signed session tokens and checks presented ones
///
/// Every method that reads a token verifies its signature first and fails
/// with [`TokenError::Signature`] when the token is malformed or forged.
/// Only [`TokenIssuer::validate`] and [`TokenIssuer::is_expired`] look at the
/// clock.
pub trait TokenIssuer: Send + Sync + Debug {
    /// Sign a token carrying the user's claims
    fn issue(&self, user: &User) -> Result<String, TokenError>;

    /// Verify the signature and return every claim
    fn get_claims(&self, token: &str) -> Result<SessionClaims, TokenError>;

    /// True when the token's subject is the user's nickname and it has not expired
    fn validate(&self, token: &str, user: &User) -> Result<bool, TokenError>;

    /// True when the current time has reached the token's expiry
    fn is_expired(&self, token: &str) -> Result<bool, TokenError>;

    /// Subject (nickname) of the token
    fn get_username(&self, token: &str) -> Result<String, TokenError> {
        Ok(self.get_claims(token)?.sub)
    }

    /// Expiry instant of the token
    fn get_expiration(&self, token: &str) -> Result<DateTime<Utc>, TokenError> {
        let claims = self.get_claims(token)?;

        claims
            .expires_at()
            .ok_or_else(|| TokenError::signature(format!("exp claim out of range: {}", claims.exp)))
    }

    /// A single claim of the token
    fn get_claim(&self, token: &str, name: ClaimName) -> Result<ClaimValue, TokenError> {
        Ok(self.get_claims(token)?.claim(name))
    }
}
