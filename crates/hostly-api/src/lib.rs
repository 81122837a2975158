//! Async REST transport for hostel-management backends.
//!
//! The backend is a flat JSON REST service: five entity collections
//! (`hotels`, `rooms`, `reservations`, `subscriptions`, `users`), each
//! speaking the same five CRUD verbs. This crate owns nothing but
//! transport mechanics:
//!
//! - **[`ResourceApi`]** — the five-verb contract one collection exposes.
//!   `hostly-core` consumes this trait, so a wiremock server, an
//!   in-process stub, or a real backend are interchangeable.
//! - **[`RestEndpoint`]** — reqwest-backed [`ResourceApi`] for one
//!   collection path.
//! - **[`RestClient`] / [`HostelApi`]** — base-URL handling and the
//!   bundle of all five endpoints.
//! - **[`ApiResponse`]** — status + reason + parsed JSON payload. HTTP
//!   error statuses travel as data; `Err` means the transport itself
//!   failed.

pub mod client;
pub mod error;
pub mod resource;
pub mod response;
pub mod transport;

pub use client::{EndpointPaths, HostelApi, RestClient};
pub use error::Error;
pub use resource::{ResourceApi, RestEndpoint};
pub use response::ApiResponse;
pub use transport::{TlsMode, TransportConfig};
