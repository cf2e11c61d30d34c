//! User domain
//!
//! The user record is owned by an external user-management component; this
//! crate only reads it when building token claims.

mod entity;

pub use entity::User;
