//! User record consumed by the token issuer

use serde::{Deserialize, Serialize};

/// A user account as supplied by the user-management component
///
/// Only the fields that end up in a session token are carried here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    email: String,
    user_id: i64,
    role_id: i64,
    nickname: String,
}

impl User {
    /// Create a new user record
    pub fn new(
        email: impl Into<String>,
        user_id: i64,
        role_id: i64,
        nickname: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            user_id,
            role_id,
            nickname: nickname.into(),
        }
    }

    // Getters

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn role_id(&self) -> i64 {
        self.role_id
    }

    /// Display name; doubles as the token subject
    pub fn nickname(&self) -> &str {
        &self.nickname
    }
}
