use thiserror::Error;

/// Top-level error type for the `hostly-api` crate.
///
/// Only transport-level failures surface here: connection problems, bad
/// URLs, TLS setup, and unparseable success bodies. HTTP error statuses
/// are NOT errors at this layer -- they travel inside [`ApiResponse`]
/// so the data layer can decide how to degrade.
///
/// [`ApiResponse`]: crate::ApiResponse
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS or client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    /// A 2xx response carried a body that is not valid JSON.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}
