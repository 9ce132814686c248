use std::sync::{Arc, Mutex};

use httpmock::prelude::*;

use crate::http_client::reqwest::{ReqwestTransport, DEFAULT_USER_AGENT};
use crate::http_client::{Client, HttpTransport};
use crate::{ClientConfig, Error, Request, RequestSpec, Response, Result};

fn transport(config: &ClientConfig) -> ReqwestTransport {
    ReqwestTransport::create(config).unwrap()
}

#[test]
fn get_round_trip() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/defaults");
        then.status(200)
            .header("content-type", "text/plain")
            .body("hello");
    });

    let config = ClientConfig::default();
    let request = RequestSpec::get(server.url("/defaults"))
        .resolve(&config)
        .unwrap();
    let response = transport(&config).send(&request).unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.status, "OK");
    assert_eq!(response.content_type(), Some("text/plain"));
    assert_eq!(response.body.as_deref(), Some("hello"));
}

#[test]
fn post_delivers_body_and_headers() {
    let body = "{\"result\": \"content\"}";

    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/defaults")
            .header("Content-Type", "application/json")
            .header("X-Custom-Header", "test_validate_verify")
            .body(body);
        then.status(200);
    });

    let config = ClientConfig::default();
    let request = RequestSpec::post(server.url("/defaults"), body)
        .header("Content-Type", "application/json")
        .header("X-Custom-Header", "test_validate_verify")
        .resolve(&config)
        .unwrap();
    let response = transport(&config).send(&request).unwrap();

    mock.assert();
    assert_eq!(response.status_code, 200);
}

#[test]
fn head_response_has_no_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(httpmock::Method::HEAD).path("/defaults");
        then.status(200);
    });

    let config = ClientConfig::default();
    let request = RequestSpec::head(server.url("/defaults"))
        .resolve(&config)
        .unwrap();
    let response = transport(&config).send(&request).unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, None);
}

#[test]
fn redirect_surfaced_when_not_following() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/moved");
        then.status(302).header("location", server.url("/target").as_str());
    });

    let config = ClientConfig::builder().follow_redirects(false).build();
    let request = RequestSpec::get(server.url("/moved"))
        .resolve(&config)
        .unwrap();
    let response = transport(&config).send(&request).unwrap();

    assert_eq!(response.status_code, 302);
}

#[test]
fn redirect_followed_when_requested() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/moved");
        then.status(302).header("location", server.url("/target").as_str());
    });
    server.mock(|when, then| {
        when.method(GET).path("/target");
        then.status(200).body("landed");
    });

    let config = ClientConfig::builder().follow_redirects(false).build();
    let request = RequestSpec::get(server.url("/moved"))
        .follow_redirects(true)
        .resolve(&config)
        .unwrap();
    let response = transport(&config).send(&request).unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body.as_deref(), Some("landed"));
}

#[test]
fn default_user_agent_applies_when_unconfigured() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/defaults")
            .header("user-agent", DEFAULT_USER_AGENT);
        then.status(200);
    });

    let config = ClientConfig::default();
    let request = RequestSpec::get(server.url("/defaults"))
        .resolve(&config)
        .unwrap();
    transport(&config).send(&request).unwrap();

    mock.assert();
}

#[test]
fn explicit_user_agent_sent_verbatim() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/defaults")
            .header("user-agent", "TestClient/1.0");
        then.status(200);
    });

    let config = ClientConfig::builder().user_agent("TestClient/1.0").build();
    let request = RequestSpec::get(server.url("/defaults"))
        .resolve(&config)
        .unwrap();
    transport(&config).send(&request).unwrap();

    mock.assert();
}

/// Records every resolved request and answers with a canned response.
struct RecordingTransport {
    seen: Arc<Mutex<Vec<Request>>>,
    status_code: u16,
}

impl HttpTransport for RecordingTransport {
    fn send(&self, request: &Request) -> Result<Response> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(Response {
            status_code: self.status_code,
            status: "OK".to_string(),
            headers: vec![],
            body: None,
        })
    }
}

#[test]
fn client_send_hands_resolved_request_to_transport() {
    let seen = Arc::new(Mutex::new(vec![]));
    let config = ClientConfig::builder()
        .accept("*/*")
        .follow_redirects(false)
        .build();
    let client = Client::with_transport(
        config,
        Box::new(RecordingTransport {
            seen: Arc::clone(&seen),
            status_code: 200,
        }),
    );

    client
        .send(
            RequestSpec::get("http://localhost/x")
                .header("Accept", "text/html")
                .follow_redirects(true),
        )
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(
        seen[0].headers,
        vec![("Accept".to_string(), "text/html".to_string())]
    );
    assert!(seen[0].follow_redirects);
}

#[test]
fn validation_failure_never_reaches_transport() {
    struct PanickingTransport;
    impl HttpTransport for PanickingTransport {
        fn send(&self, _request: &Request) -> Result<Response> {
            panic!("transport must not be called for an invalid request");
        }
    }

    let client = Client::with_transport(ClientConfig::default(), Box::new(PanickingTransport));
    let result = client.send(RequestSpec::get("http://localhost/").body("nope"));
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}
