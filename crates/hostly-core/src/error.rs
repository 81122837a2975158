// ── Failure records ──
//
// Nothing in this crate is fatal: store and session operations degrade
// to `None`/`false`/empty and append one of these records to the
// owning component's error log. Consumers read the log (and the busy
// flag) to decide what to show.

use std::fmt;

use hostly_api::ApiResponse;

/// One recorded operation failure, scoped to a store or the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    /// The operation that failed (`"fetch_all"`, `"login"`, ...).
    pub operation: String,
    /// HTTP status, when the failure was an unexpected response.
    pub status: Option<u16>,
    pub message: String,
}

impl StoreError {
    pub(crate) fn new(operation: &str, message: impl Into<String>) -> Self {
        Self {
            operation: operation.to_owned(),
            status: None,
            message: message.into(),
        }
    }

    /// A transport-level failure (connection, TLS, bad body).
    pub(crate) fn transport(operation: &str, err: &hostly_api::Error) -> Self {
        Self {
            operation: operation.to_owned(),
            status: None,
            message: err.to_string(),
        }
    }

    /// An unexpected HTTP status carried back as data.
    pub(crate) fn status(operation: &str, resp: &ApiResponse) -> Self {
        Self {
            operation: operation.to_owned(),
            status: Some(resp.status),
            message: resp.reason.clone(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{}: {} ({status})", self.operation, self.message),
            None => write!(f, "{}: {}", self.operation, self.message),
        }
    }
}
