use std::sync::Arc;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::cookie::Jar;
use reqwest::redirect::Policy;

use crate::http_client::HttpTransport;
use crate::{ClientConfig, CookiePolicy, Method, Request, Response, Result};

/// User-Agent sent when the configuration does not provide one. A resolved
/// User-Agent header replaces it entirely, with no appended suffix.
pub(crate) const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Transport backed by `reqwest::blocking::Client`.
///
/// reqwest fixes the redirect policy when the client is built, so two inner
/// clients are kept and the resolved per-request flag picks between them.
pub struct ReqwestTransport {
    redirecting: Client,
    direct: Client,
}

impl ReqwestTransport {
    pub fn create(config: &ClientConfig) -> Result<ReqwestTransport> {
        // One jar for both inner clients, so cookies set on a redirecting
        // request are replayed on non-redirecting ones and vice versa.
        let jar = match config.cookie_policy() {
            CookiePolicy::AcceptAll => Some(Arc::new(Jar::default())),
            CookiePolicy::Ignore => None,
        };
        Ok(ReqwestTransport {
            redirecting: build_client(config, Policy::limited(10), jar.clone())?,
            direct: build_client(config, Policy::none(), jar)?,
        })
    }
}

fn build_client(config: &ClientConfig, redirect: Policy, jar: Option<Arc<Jar>>) -> Result<Client> {
    let mut builder = Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .redirect(redirect)
        .timeout(config.read_timeout());
    if let Some(jar) = jar {
        builder = builder.cookie_provider(jar);
    }
    if let Some(timeout) = config.connect_timeout() {
        builder = builder.connect_timeout(timeout);
    }
    Ok(builder.build()?)
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: &Request) -> Result<Response> {
        let client = if request.follow_redirects {
            &self.redirecting
        } else {
            &self.direct
        };
        let mut request_builder = client.request((&request.method).into(), &request.url);
        request_builder = set_headers(&request.headers, request_builder);
        if let Some(body) = &request.body {
            request_builder = request_builder.body(body.clone());
        }
        let response = request_builder.send()?;

        read_response(response)
    }
}

fn set_headers(headers: &[(String, String)], mut request_builder: RequestBuilder) -> RequestBuilder {
    for (name, value) in headers {
        request_builder = request_builder.header(name, value);
    }
    request_builder
}

fn read_response(response: reqwest::blocking::Response) -> Result<Response> {
    let status = response.status();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = response.text()?;
    Ok(Response {
        status_code: status.as_u16(),
        status: status.canonical_reason().unwrap_or_default().to_string(),
        headers,
        body: match body {
            body if !body.is_empty() => Some(body),
            _ => None,
        },
    })
}

impl From<&Method> for reqwest::Method {
    fn from(method: &Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Head => reqwest::Method::HEAD,
            Method::Delete => reqwest::Method::DELETE,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        }
    }
}
