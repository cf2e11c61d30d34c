//! Issue/expiry policy for session tokens

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::TokenError;

/// Issued-at stamped on every token under the fixed lifetime
pub const FIXED_ISSUED_AT: i64 = 1_584_060_612;
/// Expiry stamped on every token under the fixed lifetime
pub const FIXED_EXPIRES_AT: i64 = 1_584_064_212;
/// Validity of a rolling token in seconds (5 hours)
pub const DEFAULT_VALIDITY_SECS: u64 = 5 * 60 * 60;

/// How `iat` and `exp` are chosen when a token is issued
///
/// `Fixed` is the long-standing behaviour: every token carries the same two
/// instants no matter when it was issued, so all tokens share one absolute
/// deadline. `Rolling` stamps `now` and `now + validity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TokenLifetime {
    Fixed {
        #[serde(default = "default_issued_at")]
        issued_at: i64,
        #[serde(default = "default_expires_at")]
        expires_at: i64,
    },
    Rolling {
        #[serde(default = "default_validity_secs")]
        validity_secs: u64,
    },
}

fn default_issued_at() -> i64 {
    FIXED_ISSUED_AT
}

fn default_expires_at() -> i64 {
    FIXED_EXPIRES_AT
}

fn default_validity_secs() -> u64 {
    DEFAULT_VALIDITY_SECS
}

impl Default for TokenLifetime {
    fn default() -> Self {
        Self::Fixed {
            issued_at: FIXED_ISSUED_AT,
            expires_at: FIXED_EXPIRES_AT,
        }
    }
}

impl TokenLifetime {
    /// Rolling lifetime with the default 5 hour validity
    pub fn rolling() -> Self {
        Self::Rolling {
            validity_secs: DEFAULT_VALIDITY_SECS,
        }
    }

    /// Check that the policy can produce a non-empty window
    pub fn validate(&self) -> Result<(), TokenError> {
        match *self {
            Self::Fixed {
                issued_at,
                expires_at,
            } if expires_at <= issued_at => Err(TokenError::configuration(format!(
                "Fixed token expiry {} must be after issue time {}",
                expires_at, issued_at
            ))),
            Self::Rolling { validity_secs: 0 } => Err(TokenError::configuration(
                "Rolling token validity must be greater than zero",
            )),
            _ => Ok(()),
        }
    }

    /// `(iat, exp)` in epoch seconds for a token issued at `now`
    pub fn window(&self, now: DateTime<Utc>) -> (i64, i64) {
        match *self {
            Self::Fixed {
                issued_at,
                expires_at,
            } => (issued_at, expires_at),
            Self::Rolling { validity_secs } => {
                let issued_at = now.timestamp();
                let validity = i64::try_from(validity_secs).unwrap_or(i64::MAX);
                (issued_at, issued_at.saturating_add(validity))
            }
        }
    }
}
