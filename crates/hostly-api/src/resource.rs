// Generic CRUD resource endpoint
//
// Every entity kind on the backend is one flat REST collection
// (`/hotels`, `/rooms`, ...). The five verbs below are the whole
// contract; `RestEndpoint` is the reqwest-backed implementation and
// test doubles implement the same trait in-process.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::response::ApiResponse;

/// The five CRUD verbs a resource collection exposes.
///
/// Implementations return an [`ApiResponse`] even for HTTP error
/// statuses; `Err` is reserved for transport-level failures. Ids are
/// passed as strings -- the data layer owns the typed id representation.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    /// `GET /{path}` -- the full collection.
    async fn get_all(&self) -> Result<ApiResponse, Error>;

    /// `GET /{path}/{id}` -- a single record.
    async fn get_by_id(&self, id: &str) -> Result<ApiResponse, Error>;

    /// `POST /{path}` -- create a record; the server assigns the id.
    async fn create(&self, record: &Value) -> Result<ApiResponse, Error>;

    /// `PUT /{path}/{id}` -- full-object replacement.
    async fn update(&self, id: &str, record: &Value) -> Result<ApiResponse, Error>;

    /// `DELETE /{path}/{id}`.
    async fn delete(&self, id: &str) -> Result<ApiResponse, Error>;
}

/// One REST collection bound to a shared HTTP client.
///
/// Built by [`RestClient::endpoint`](crate::RestClient::endpoint); cheap
/// to clone.
#[derive(Debug, Clone)]
pub struct RestEndpoint {
    http: reqwest::Client,
    collection_url: Url,
}

impl RestEndpoint {
    pub(crate) fn new(http: reqwest::Client, collection_url: Url) -> Self {
        Self {
            http,
            collection_url,
        }
    }

    /// `{base}/{path}/{id}`
    fn item_url(&self, id: &str) -> Result<Url, Error> {
        let base = self.collection_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{id}"))?)
    }
}

#[async_trait]
impl ResourceApi for RestEndpoint {
    async fn get_all(&self) -> Result<ApiResponse, Error> {
        debug!("GET {}", self.collection_url);
        let resp = self.http.get(self.collection_url.clone()).send().await?;
        ApiResponse::read(resp).await
    }

    async fn get_by_id(&self, id: &str) -> Result<ApiResponse, Error> {
        let url = self.item_url(id)?;
        debug!("GET {url}");
        let resp = self.http.get(url).send().await?;
        ApiResponse::read(resp).await
    }

    async fn create(&self, record: &Value) -> Result<ApiResponse, Error> {
        debug!("POST {}", self.collection_url);
        let resp = self
            .http
            .post(self.collection_url.clone())
            .json(record)
            .send()
            .await?;
        ApiResponse::read(resp).await
    }

    async fn update(&self, id: &str, record: &Value) -> Result<ApiResponse, Error> {
        let url = self.item_url(id)?;
        debug!("PUT {url}");
        let resp = self.http.put(url).json(record).send().await?;
        ApiResponse::read(resp).await
    }

    async fn delete(&self, id: &str) -> Result<ApiResponse, Error> {
        let url = self.item_url(id)?;
        debug!("DELETE {url}");
        let resp = self.http.delete(url).send().await?;
        ApiResponse::read(resp).await
    }
}
