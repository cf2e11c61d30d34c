use thiserror::Error;

/// Errors raised while issuing or reading session tokens
///
/// An expired or mismatched token is not an error: `validate` reports it as
/// `false`. Only malformed/forged tokens and misconfiguration end up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Encoding error: {message}")]
    Encoding { message: String },

    #[error("Signature error: {message}")]
    Signature { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl TokenError {
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    pub fn signature(message: impl Into<String>) -> Self {
        Self::Signature {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True when the caller should be treated as unauthenticated
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Signature { .. })
    }
}
