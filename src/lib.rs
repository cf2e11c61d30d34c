//! ClimateTree session tokens
//!
//! Issues HMAC-signed session tokens for user accounts and validates
//! presented tokens against the same shared secret:
//! - `domain`: user record, claims, lifetime policy, the `TokenIssuer` contract
//! - `infrastructure`: the `jsonwebtoken`-backed issuer and logging setup
//! - `config`: layered file/environment configuration
//! - `cli`: command line front end

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    ClaimName, ClaimValue, SessionClaims, TokenError, TokenIssuer, TokenLifetime, User,
};
pub use infrastructure::auth::{JwtTokenIssuer, TokenConfig};
