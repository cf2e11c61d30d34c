//! Domain layer - Core types and contracts

pub mod error;
pub mod token;
pub mod user;

pub use error::TokenError;
pub use token::{
    ClaimName, ClaimValue, Clock, SessionClaims, SystemClock, TokenIssuer, TokenLifetime,
};
pub use user::User;
