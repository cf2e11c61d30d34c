//! Session token domain
//!
//! Claims, issue/expiry policy, the time source and the issuer contract.
//! The signing implementation lives in `infrastructure::auth`.

mod claims;
mod clock;
mod issuer;
mod lifetime;

pub use claims::{ClaimName, ClaimValue, SessionClaims};
pub use clock::{Clock, SystemClock};
pub use issuer::TokenIssuer;
pub use lifetime::{
    TokenLifetime, DEFAULT_VALIDITY_SECS, FIXED_EXPIRES_AT, FIXED_ISSUED_AT,
};

#[cfg(test)]
pub use clock::MockClock;
