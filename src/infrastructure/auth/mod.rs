//! Authentication infrastructure module
//!
//! This module provides HMAC-signed session token issuing and validation.

mod jwt;

pub use jwt::{JwtTokenIssuer, TokenConfig, DEFAULT_SECRET};
