//! HMAC-signed session tokens backed by `jsonwebtoken`

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Deserialize;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::token::{Clock, SessionClaims, SystemClock, TokenIssuer, TokenLifetime};
use crate::domain::user::User;
use crate::domain::TokenError;

/// Secret used when no configuration overrides it
pub const DEFAULT_SECRET: &str = "climatetree";

/// Configuration for the session token issuer
#[derive(Clone, Deserialize)]
pub struct TokenConfig {
    /// Shared HMAC secret for signing and verifying
    #[serde(default = "default_secret")]
    pub secret: String,
    /// Issue/expiry policy
    #[serde(default)]
    pub lifetime: TokenLifetime,
}

fn default_secret() -> String {
    DEFAULT_SECRET.to_string()
}

impl TokenConfig {
    /// Create new token configuration
    pub fn new(secret: impl Into<String>, lifetime: TokenLifetime) -> Self {
        Self {
            secret: secret.into(),
            lifetime,
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET, TokenLifetime::default())
    }
}

impl Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"[hidden]")
            .field("lifetime", &self.lifetime)
            .finish()
    }
}

/// Session token issuer signing with HS256 under a shared secret
#[derive(Clone)]
pub struct JwtTokenIssuer {
    lifetime: TokenLifetime,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl Debug for JwtTokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenIssuer")
            .field("lifetime", &self.lifetime)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtTokenIssuer {
    /// Create an issuer reading the wall clock
    pub fn new(config: TokenConfig) -> Result<Self, TokenError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create an issuer with an explicit time source
    pub fn with_clock(config: TokenConfig, clock: Arc<dyn Clock>) -> Result<Self, TokenError> {
        if config.secret.is_empty() {
            return Err(TokenError::configuration("Token secret must not be empty"));
        }

        config.lifetime.validate()?;

        let secret = config.secret.as_bytes();

        // Expiry is reported by `validate`, never as a decode failure.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "exp"]);

        Ok(Self {
            lifetime: config.lifetime,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            clock,
        })
    }

    /// Create an issuer with default configuration
    pub fn with_default_config() -> Result<Self, TokenError> {
        Self::new(TokenConfig::default())
    }

    /// Issue/expiry policy applied by [`TokenIssuer::issue`]
    pub fn lifetime(&self) -> TokenLifetime {
        self.lifetime
    }

    /// Same check as [`TokenIssuer::validate`] against a bare nickname
    pub fn validate_nickname(&self, token: &str, nickname: &str) -> Result<bool, TokenError> {
        let claims = self.get_claims(token)?;

        let subject_matches = claims.subject() == nickname;
        let expired = claims.is_expired_at(self.clock.now());

        debug!(
            subject = %claims.sub,
            subject_matches,
            expired,
            "Validated session token"
        );

        Ok(subject_matches && !expired)
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user: &User) -> Result<String, TokenError> {
        let (issued_at, expires_at) = self.lifetime.window(self.clock.now());
        let claims = SessionClaims::for_user(user, issued_at, expires_at);

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::encoding(format!("Failed to sign session token: {}", e)))?;

        debug!(subject = %claims.sub, exp = claims.exp, "Issued session token");

        Ok(token)
    }

    fn get_claims(&self, token: &str) -> Result<SessionClaims, TokenError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                warn!(reason = %e, "Rejected session token");
                TokenError::signature(format!("Invalid session token: {}", e))
            })
    }

    fn validate(&self, token: &str, user: &User) -> Result<bool, TokenError> {
        self.validate_nickname(token, user.nickname())
    }

    fn is_expired(&self, token: &str) -> Result<bool, TokenError> {
        Ok(self.get_claims(token)?.is_expired_at(self.clock.now()))
    }
}
