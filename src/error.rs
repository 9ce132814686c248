use std::fmt::{self, Display, Formatter};

use thiserror::Error as ThisError;

use crate::model::Response;

/// Errors surfaced by this crate.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The request was rejected by validation before any network I/O.
    #[error("{0}")]
    InvalidArgument(String),
    /// A failure in the underlying transport, propagated unmodified
    /// (connection refused, timeout, invalid URL, ...).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// A non-success HTTP status, raised only by the paths that opt into it
    /// ([`Client::get_text`], [`Response::error_for_status`]).
    ///
    /// [`Client::get_text`]: crate::Client::get_text
    /// [`Response::error_for_status`]: crate::Response::error_for_status
    #[error("{0}")]
    HttpStatus(ErrorResult),
}

/// Structured representation of a non-success (>= 400) HTTP response.
#[derive(Debug, Clone)]
pub struct ErrorResult {
    /// Numeric status code, e.g. 404.
    pub status_code: u16,
    /// Status reason phrase, e.g. "Not Found".
    pub status: String,
    /// The Content-Type the server sent, if any.
    pub content_type: Option<String>,
    /// Response headers, in the order the server sent them.
    pub headers: Vec<(String, String)>,
    /// Response body text, empty if the response had none.
    pub body: String,
}

impl ErrorResult {
    /// Captures a failed response. Pure data transformation; no further
    /// I/O happens here.
    pub fn from_response(response: Response) -> Self {
        let content_type = response.content_type().map(str::to_string);
        ErrorResult {
            status_code: response.status_code,
            status: response.status,
            content_type,
            headers: response.headers,
            body: response.body.unwrap_or_default(),
        }
    }
}

impl Display for ErrorResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status_code, self.status)?;
        if !self.body.is_empty() {
            write!(f, " {}", self.body)?;
        }
        Ok(())
    }
}
