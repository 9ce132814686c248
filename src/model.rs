use std::fmt::{self, Display, Formatter};

use crate::config::{set_header, ClientConfig};
use crate::{Error, ErrorResult, Result};

/// The HTTP methods this client supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Delete,
    Post,
    Put,
}

impl Method {
    /// GET, HEAD and DELETE requests must not carry a body; POST and PUT
    /// require one.
    pub fn allows_body(self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let method = match *self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Delete => "DELETE",
            Method::Post => "POST",
            Method::Put => "PUT",
        };
        f.write_str(method)
    }
}

/// Per-call request parameters, before resolution against the client's
/// [`ClientConfig`] defaults.
///
/// Headers set here override same-named defaults; `follow_redirects`
/// overrides the configured flag for this call only.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    method: Method,
    url: String,
    headers: Vec<(String, String)>,
    body: Option<String>,
    follow_redirects: Option<bool>,
}

impl RequestSpec {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: vec![],
            body: None,
            follow_redirects: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn head(url: impl Into<String>) -> Self {
        Self::new(Method::Head, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Method::Post, url).body(body)
    }

    pub fn put(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Method::Put, url).body(body)
    }

    /// Adds a header for this call. Overrides a same-named default from the
    /// client configuration; setting the same name twice keeps the last
    /// value.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        set_header(&mut self.headers, name.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Overrides the configured follow-redirects flag for this call.
    pub fn follow_redirects(mut self, val: bool) -> Self {
        self.follow_redirects = Some(val);
        self
    }

    /// Resolves this spec against the client defaults, producing the fully
    /// merged request descriptor, or fails validation before any network
    /// I/O happens.
    pub fn resolve(self, config: &ClientConfig) -> Result<Request> {
        if self.url.is_empty() {
            return Err(Error::InvalidArgument(
                "request URL must not be empty".to_string(),
            ));
        }
        match (self.method.allows_body(), &self.body) {
            (false, Some(_)) => {
                return Err(Error::InvalidArgument(format!(
                    "body must not be supplied for a {} request",
                    self.method
                )));
            }
            (true, None) => {
                return Err(Error::InvalidArgument(format!(
                    "a {} request requires a body",
                    self.method
                )));
            }
            _ => {}
        }

        let mut headers = config.default_headers().to_vec();
        for (name, value) in self.headers {
            set_header(&mut headers, name, value);
        }

        Ok(Request {
            method: self.method,
            url: self.url,
            headers,
            body: self.body,
            follow_redirects: self.follow_redirects.unwrap_or(config.follow_redirects()),
        })
    }
}

/// A fully resolved request descriptor, ready for the transport.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub follow_redirects: bool,
}

/// An HTTP response, whatever its status code.
///
/// Headers keep the order and multiplicity the server sent them with.
#[derive(Debug)]
pub struct Response {
    pub status_code: u16,
    pub status: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// The Content-Type header value, if the server sent one.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.as_str())
    }

    /// Converts a response with status >= 400 into [`Error::HttpStatus`],
    /// passing any other response through unchanged.
    pub fn error_for_status(self) -> Result<Response> {
        if self.status_code >= 400 {
            Err(Error::HttpStatus(ErrorResult::from_response(self)))
        } else {
            Ok(self)
        }
    }
}
