//! Typed failures for Scout API calls.
//!
//! ERROR HANDLING
//! ==============
//! Read failures stay local to the section that issued them. Only purchase
//! and export failures reach the user, as a toast built from
//! [`ApiError::translation_key`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of one request/response call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("{code}: {message}")]
    GraphQl { code: String, message: String },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("response missing field: {0}")]
    MissingData(&'static str),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Structured error code, when the API supplied one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::GraphQl { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    /// i18n key for the user-facing message.
    #[must_use]
    pub fn translation_key(&self) -> String {
        match self {
            Self::GraphQl { code, .. } => format!("error.{}", code.to_ascii_lowercase()),
            Self::Transport(_) => "error.network".to_owned(),
            Self::Status(401 | 403) => "error.unauthorized".to_owned(),
            _ => "error.generic".to_owned(),
        }
    }
}

/// Failure of the token-then-download export sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("access token: {0}")]
    Token(ApiError),
    #[error("download failed: {0}")]
    Download(String),
    #[error("property not loaded")]
    MissingProperty,
}

impl ExportError {
    #[must_use]
    pub fn translation_key(&self) -> String {
        match self {
            Self::Token(inner) => inner.translation_key(),
            Self::Download(_) | Self::MissingProperty => "error.export".to_owned(),
        }
    }
}
