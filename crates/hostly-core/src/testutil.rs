// Shared test doubles.
//
// `StubApi` is an in-process `ResourceApi`: tests enqueue canned
// responses (or transport failures) and can inspect what each verb was
// called with.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use hostly_api::{ApiResponse, Error, ResourceApi};

/// One captured call: the verb, the id (when addressed), the body (when sent).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CapturedCall {
    pub verb: &'static str,
    pub id: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
pub(crate) struct StubApi {
    responses: Mutex<VecDeque<Result<ApiResponse, Error>>>,
    calls: Mutex<Vec<CapturedCall>>,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a response with the given status and JSON body.
    pub fn respond(&self, status: u16, body: Value) {
        let reason = match status {
            200 => "OK",
            201 => "Created",
            404 => "Not Found",
            500 => "Internal Server Error",
            _ => "Unknown",
        };
        self.responses
            .lock()
            .expect("stub lock poisoned")
            .push_back(Ok(ApiResponse {
                status,
                reason: reason.into(),
                body,
            }));
    }

    /// Enqueue a transport-level failure.
    pub fn fail(&self) {
        self.responses
            .lock()
            .expect("stub lock poisoned")
            .push_back(Err(Error::Tls("connection refused (stub)".into())));
    }

    pub fn calls(&self) -> Vec<CapturedCall> {
        self.calls.lock().expect("stub lock poisoned").clone()
    }

    fn next(&self, verb: &'static str, id: Option<&str>, body: Option<&Value>) -> Result<ApiResponse, Error> {
        self.calls
            .lock()
            .expect("stub lock poisoned")
            .push(CapturedCall {
                verb,
                id: id.map(ToOwned::to_owned),
                body: body.cloned(),
            });
        self.responses
            .lock()
            .expect("stub lock poisoned")
            .pop_front()
            .unwrap_or_else(|| panic!("no stubbed response for {verb}"))
    }
}

#[async_trait]
impl ResourceApi for StubApi {
    async fn get_all(&self) -> Result<ApiResponse, Error> {
        self.next("get_all", None, None)
    }

    async fn get_by_id(&self, id: &str) -> Result<ApiResponse, Error> {
        self.next("get_by_id", Some(id), None)
    }

    async fn create(&self, record: &Value) -> Result<ApiResponse, Error> {
        self.next("create", None, Some(record))
    }

    async fn update(&self, id: &str, record: &Value) -> Result<ApiResponse, Error> {
        self.next("update", Some(id), Some(record))
    }

    async fn delete(&self, id: &str) -> Result<ApiResponse, Error> {
        self.next("delete", Some(id), None)
    }
}
