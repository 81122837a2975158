// REST client for a hostel-management backend
//
// Wraps a shared `reqwest::Client` with base-URL handling and vends one
// `RestEndpoint` per entity collection. Collection paths are
// configurable because deployments mount the resources under different
// prefixes (`/hotels` vs `/api/v1/hotels`).

use url::Url;

use crate::error::Error;
use crate::resource::RestEndpoint;
use crate::transport::TransportConfig;

/// Relative collection paths for the five entity kinds.
#[derive(Debug, Clone)]
pub struct EndpointPaths {
    pub hotels: String,
    pub rooms: String,
    pub reservations: String,
    pub subscriptions: String,
    pub users: String,
}

impl Default for EndpointPaths {
    fn default() -> Self {
        Self {
            hotels: "hotels".into(),
            rooms: "rooms".into(),
            reservations: "reservations".into(),
            subscriptions: "subscriptions".into(),
            users: "users".into(),
        }
    }
}

/// Shared HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RestClient {
    /// Create a client from a base URL and transport settings.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client()?,
            base_url,
        })
    }

    /// Create a client with a pre-built `reqwest::Client` (tests, custom setups).
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Bind a collection path to this client: `{base}/{path}`.
    pub fn endpoint(&self, path: &str) -> Result<RestEndpoint, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_matches('/');
        let url = Url::parse(&format!("{base}/{path}"))?;
        Ok(RestEndpoint::new(self.http.clone(), url))
    }
}

/// The full backend surface: one endpoint per entity kind.
///
/// This is what the data layer consumes; each handle implements
/// [`ResourceApi`](crate::ResourceApi) independently.
#[derive(Debug, Clone)]
pub struct HostelApi {
    pub hotels: RestEndpoint,
    pub rooms: RestEndpoint,
    pub reservations: RestEndpoint,
    pub subscriptions: RestEndpoint,
    pub users: RestEndpoint,
}

impl HostelApi {
    /// Bind all five collections against one client.
    pub fn new(client: &RestClient, paths: &EndpointPaths) -> Result<Self, Error> {
        Ok(Self {
            hotels: client.endpoint(&paths.hotels)?,
            rooms: client.endpoint(&paths.rooms)?,
            reservations: client.endpoint(&paths.reservations)?,
            subscriptions: client.endpoint(&paths.subscriptions)?,
            users: client.endpoint(&paths.users)?,
        })
    }
}
