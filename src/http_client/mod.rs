use log::debug;

use crate::http_client::reqwest::ReqwestTransport;
use crate::{ClientConfig, Request, RequestSpec, Response, Result};

#[cfg(test)]
mod tests;

pub mod reqwest;

/// The seam between request resolution and the actual network I/O.
///
/// The production implementation is [`ReqwestTransport`]; tests substitute
/// their own to exercise the client without a server.
pub trait HttpTransport: Send + Sync {
    /// Performs exactly one send attempt and returns its outcome unmodified.
    fn send(&self, request: &Request) -> Result<Response>;
}

/// A configured HTTP client.
///
/// Holds the immutable [`ClientConfig`] and a transport; safe to share
/// across threads for independent requests.
pub struct Client {
    config: ClientConfig,
    transport: Box<dyn HttpTransport>,
}

impl Client {
    /// Builds a client backed by [`ReqwestTransport`].
    pub fn new(config: ClientConfig) -> Result<Client> {
        let transport = ReqwestTransport::create(&config)?;
        Ok(Client {
            config,
            transport: Box::new(transport),
        })
    }

    /// Builds a client over a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: Box<dyn HttpTransport>) -> Client {
        Client { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends a GET request.
    pub fn get(&self, url: impl Into<String>) -> Result<Response> {
        self.send(RequestSpec::get(url))
    }

    /// Sends a HEAD request.
    pub fn head(&self, url: impl Into<String>) -> Result<Response> {
        self.send(RequestSpec::head(url))
    }

    /// Sends a DELETE request.
    pub fn delete(&self, url: impl Into<String>) -> Result<Response> {
        self.send(RequestSpec::delete(url))
    }

    /// Sends a POST request with the given body.
    pub fn post(&self, url: impl Into<String>, body: impl Into<String>) -> Result<Response> {
        self.send(RequestSpec::post(url, body))
    }

    /// Sends a PUT request with the given body.
    pub fn put(&self, url: impl Into<String>, body: impl Into<String>) -> Result<Response> {
        self.send(RequestSpec::put(url, body))
    }

    /// Resolves the spec against the client defaults and sends it.
    ///
    /// The response is returned whatever its status code; callers inspect
    /// the status themselves or call [`Response::error_for_status`].
    pub fn send(&self, spec: RequestSpec) -> Result<Response> {
        let request = spec.resolve(&self.config)?;
        debug!("{} {}", request.method, request.url);
        let response = self.transport.send(&request)?;
        debug!(
            "{} {} -> {} {}",
            request.method, request.url, response.status_code, response.status
        );
        Ok(response)
    }

    /// Sends a GET request and returns the body text, failing with
    /// [`Error::HttpStatus`] on a non-success response.
    ///
    /// [`Error::HttpStatus`]: crate::Error::HttpStatus
    pub fn get_text(&self, url: impl Into<String>) -> Result<String> {
        let response = self.get(url)?.error_for_status()?;
        Ok(response.body.unwrap_or_default())
    }
}
