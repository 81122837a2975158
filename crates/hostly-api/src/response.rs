// Status-carrying API result
//
// The backend is a plain JSON REST service: success and failure both come
// back as ordinary HTTP responses. `ApiResponse` keeps the status, the
// canonical reason text, and the parsed payload together so callers can
// report failures without ever touching reqwest types.

use serde_json::Value;

use crate::error::Error;

/// One REST exchange: HTTP status, reason text, and parsed JSON payload.
///
/// A non-2xx status is carried as data, not as an [`Error`] -- the data
/// layer decides whether to degrade to an empty result or record it.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Canonical reason phrase ("OK", "Not Found", ...).
    pub reason: String,
    /// Parsed JSON body; `Value::Null` for empty or non-JSON error bodies.
    pub body: Value,
}

impl ApiResponse {
    /// Consume a `reqwest::Response` into an `ApiResponse`.
    ///
    /// A 2xx response with an unparseable body is a [`Error::Deserialization`];
    /// error responses tolerate any body shape (HTML error pages included).
    pub(crate) async fn read(resp: reqwest::Response) -> Result<Self, Error> {
        let status = resp.status();
        let reason = status.canonical_reason().unwrap_or("Unknown").to_owned();
        let text = resp.text().await.map_err(Error::Transport)?;

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str(&text) {
                Ok(v) => v,
                Err(e) if status.is_success() => {
                    return Err(Error::Deserialization {
                        message: e.to_string(),
                        body: text,
                    });
                }
                Err(_) => Value::Null,
            }
        };

        Ok(Self {
            status: status.as_u16(),
            reason,
            body,
        })
    }

    /// `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
