//! Infrastructure layer - External library integrations

pub mod auth;
pub mod logging;
