//! A lightweight convenience layer over [reqwest]'s blocking client.
//!
//! Supports GET, HEAD, DELETE, POST and PUT. A [`Client`] is configured once
//! through [`ClientConfig`] and reused across requests; per-call values
//! (extra headers, body, redirect behavior) are supplied with a
//! [`RequestSpec`] and merged over the configured defaults before the
//! request is handed to the transport.
//!
//! ```no_run
//! use simple_http::{Client, ClientConfig, RequestSpec};
//!
//! # fn main() -> simple_http::Result<()> {
//! let config = ClientConfig::builder()
//!     .user_agent("TestClient/1.0")
//!     .accept("application/json")
//!     .build();
//! let client = Client::new(config)?;
//!
//! let response = client.send(RequestSpec::get("http://example.com/tags/http"))?;
//! if response.is_success() {
//!     // process the response
//! } else {
//!     // handle an HTTP error response
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
pub mod http_client;
pub mod logging;
mod model;

pub use config::{ClientConfig, ClientConfigBuilder, CookiePolicy};
pub use error::{Error, ErrorResult};
pub use http_client::{Client, HttpTransport};
pub use model::{Method, Request, RequestSpec, Response};

pub type Result<T> = std::result::Result<T, Error>;
