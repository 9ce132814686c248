use std::time::Duration;

/// Cookie handling applied to every request sent by one client.
///
/// The policy is part of [`ClientConfig`] rather than process-wide state, so
/// two clients in the same process can handle cookies differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CookiePolicy {
    /// Store every cookie the server sets and replay it on later requests.
    #[default]
    AcceptAll,
    /// Discard all cookies.
    Ignore,
}

/// Immutable defaults shared by all requests sent from one [`Client`].
///
/// Built once via [`ClientConfig::builder`], then reused; cloning is cheap
/// and the value is safe to share across threads.
///
/// [`Client`]: crate::Client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    headers: Vec<(String, String)>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    follow_redirects: bool,
    cookie_policy: CookiePolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Default headers applied to every request, in insertion order.
    pub fn default_headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// The configured User-Agent, if any.
    pub fn user_agent(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("user-agent"))
            .map(|(_, value)| value.as_str())
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout
    }

    pub fn follow_redirects(&self) -> bool {
        self.follow_redirects
    }

    pub fn cookie_policy(&self) -> CookiePolicy {
        self.cookie_policy
    }
}

/// Fluent builder for [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    headers: Vec<(String, String)>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    follow_redirects: bool,
    cookie_policy: CookiePolicy,
}

impl ClientConfigBuilder {
    fn new() -> Self {
        Self {
            headers: vec![],
            connect_timeout: None,
            read_timeout: None,
            follow_redirects: true,
            cookie_policy: CookiePolicy::default(),
        }
    }

    /// Sets the User-Agent header sent with every request.
    ///
    /// A non-empty value is sent verbatim; the transport's own default
    /// User-Agent is suppressed. Empty values are ignored.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        let ua = ua.into();
        if !ua.is_empty() {
            set_header(&mut self.headers, "User-Agent".to_string(), ua);
        }
        self
    }

    /// Sets the connect timeout passed to the transport.
    pub fn timeout(mut self, value: Duration) -> Self {
        self.connect_timeout = Some(value);
        self
    }

    /// Sets the read timeout passed to the transport.
    pub fn read_timeout(mut self, value: Duration) -> Self {
        self.read_timeout = Some(value);
        self
    }

    /// Sets the Accept header sent with every request. Empty values are
    /// ignored.
    pub fn accept(mut self, mime_type: impl Into<String>) -> Self {
        let mime_type = mime_type.into();
        if !mime_type.is_empty() {
            set_header(&mut self.headers, "Accept".to_string(), mime_type);
        }
        self
    }

    /// Indicates whether redirect responses (301, 302, 307, ...) are handled
    /// automatically. Applies to all requests unless overridden per call.
    pub fn follow_redirects(mut self, val: bool) -> Self {
        self.follow_redirects = val;
        self
    }

    /// Adds a header sent with every request. Setting the same header name
    /// again replaces the earlier value.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        set_header(&mut self.headers, name.into(), value.into());
        self
    }

    pub fn cookie_policy(mut self, policy: CookiePolicy) -> Self {
        self.cookie_policy = policy;
        self
    }

    pub fn build(self) -> ClientConfig {
        ClientConfig {
            headers: self.headers,
            connect_timeout: self.connect_timeout,
            read_timeout: self.read_timeout,
            follow_redirects: self.follow_redirects,
            cookie_policy: self.cookie_policy,
        }
    }
}

/// Last write wins per header name; names compare case-insensitively.
pub(crate) fn set_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
    match headers
        .iter_mut()
        .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
    {
        Some((_, existing_value)) => *existing_value = value,
        None => headers.push((name, value)),
    }
}
