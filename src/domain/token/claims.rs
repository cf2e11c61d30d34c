//! Session token claims

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user::User;

/// Claims carried by every session token
///
/// Field order is the serialization order of the token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    pub email: String,
    pub user_id: i64,
    pub role_id: i64,
    pub nickname: String,
    /// Subject, always the user's nickname
    pub sub: String,
    /// Issued at (seconds since epoch)
    pub iat: i64,
    /// Expires at (seconds since epoch)
    pub exp: i64,
}

impl SessionClaims {
    /// Build the claims for a user with the given issue/expiry instants
    pub fn for_user(user: &User, issued_at: i64, expires_at: i64) -> Self {
        Self {
            email: user.email().to_string(),
            user_id: user.user_id(),
            role_id: user.role_id(),
            nickname: user.nickname().to_string(),
            sub: user.nickname().to_string(),
            iat: issued_at,
            exp: expires_at,
        }
    }

    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// `None` when `iat` is outside chrono's representable range
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }

    /// `None` when `exp` is outside chrono's representable range
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// A token stays usable only while `now` is strictly before `exp`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Project a single claim out of the set
    pub fn claim(&self, name: ClaimName) -> ClaimValue {
        match name {
            ClaimName::Subject => ClaimValue::Text(self.sub.clone()),
            ClaimName::Email => ClaimValue::Text(self.email.clone()),
            ClaimName::UserId => ClaimValue::Integer(self.user_id),
            ClaimName::RoleId => ClaimValue::Integer(self.role_id),
            ClaimName::Nickname => ClaimValue::Text(self.nickname.clone()),
            ClaimName::IssuedAt => ClaimValue::Integer(self.iat),
            ClaimName::ExpiresAt => ClaimValue::Integer(self.exp),
        }
    }
}

/// Selector for [`SessionClaims::claim`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimName {
    Subject,
    Email,
    UserId,
    RoleId,
    Nickname,
    IssuedAt,
    ExpiresAt,
}

impl ClaimName {
    pub const ALL: [ClaimName; 7] = [
        Self::Email,
        Self::UserId,
        Self::RoleId,
        Self::Nickname,
        Self::Subject,
        Self::IssuedAt,
        Self::ExpiresAt,
    ];

    /// Name of the claim inside the token payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Subject => "sub",
            Self::Email => "email",
            Self::UserId => "userId",
            Self::RoleId => "roleId",
            Self::Nickname => "nickname",
            Self::IssuedAt => "iat",
            Self::ExpiresAt => "exp",
        }
    }
}

impl fmt::Display for ClaimName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("Unknown claim: {}", s))
    }
}

/// Value of a single claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimValue {
    Text(String),
    Integer(i64),
}

impl ClaimValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Integer(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for ClaimValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{}", value),
        }
    }
}
