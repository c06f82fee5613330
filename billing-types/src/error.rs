//! Error types for the billing gateway.

/// Failures talking to an upstream provider.
///
/// `Display` renders the bare message so it can be handed to callers as-is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpstreamError {
    /// The provider answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Decode(String),

    /// The provider answered successfully but omitted a field we need.
    #[error("Upstream response is missing {0}")]
    MissingField(&'static str),

    /// An object identifier that cannot name a single path segment.
    #[error("Invalid identifier: '{0}'")]
    InvalidIdentifier(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes. Everything upstream collapses to
/// `Internal`; there is no distinction between provider 4xx and 5xx.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::Internal(msg) => msg,
        }
    }
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        AppError::Internal(err.to_string())
    }
}
