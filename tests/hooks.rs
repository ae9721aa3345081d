mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use httpmock::prelude::*;
use hunter_client::{Client, RequestHooks};
use reqwest::blocking::{Request, Response};

use common::*;

#[derive(Debug, Default, Clone)]
struct Recorder {
    events: Arc<Mutex<Vec<String>>>,
}

impl RequestHooks for Recorder {
    fn before_request(&self, request: &Request) {
        let has_key = request.headers().contains_key("x-api-key");
        self.events
            .lock()
            .unwrap()
            .push(format!("before {} {} key={has_key}", request.method(), request.url().path()));
    }

    fn after_response(&self, response: &Response, _elapsed: Duration) {
        self.events
            .lock()
            .unwrap()
            .push(format!("after {}", response.status().as_u16()));
    }
}

#[test]
fn hooks_run_around_each_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/email-count")
            .header("x-api-key", API_KEY);
        then.status(200).json_body(email_count_response("example.com", 7));
    });
    let recorder = Recorder::default();
    let client = Client::builder(API_KEY)
        .base_url(server.url("/v2"))
        .hooks(recorder.clone())
        .build()
        .unwrap();

    assert_eq!(client.count_emails_by_domain("example.com").unwrap(), 7);
    mock.assert();

    // The built client sends the key as a default header, merged after hooks run.
    let events = recorder.events.lock().unwrap();
    assert_eq!(
        *events,
        vec!["before GET /v2/email-count key=false", "after 200"]
    );
}

#[test]
fn hooks_see_error_responses_too() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(400);
    });
    let recorder = Recorder::default();
    let client = Client::builder(API_KEY)
        .base_url(server.url("/v2"))
        .hooks(recorder.clone())
        .build()
        .unwrap();

    assert!(client.search_emails_by_domain("bad domain").is_err());
    assert_eq!(recorder.events.lock().unwrap().last().unwrap(), "after 400");
}

#[test]
fn tracing_hooks_are_the_default() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("hunter_client=debug")
        .with_test_writer()
        .try_init();

    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/email-verifier");
        then.status(200)
            .json_body(email_verifier_response("test@example.com", "valid"));
    });
    let client = Client::builder(API_KEY)
        .base_url(server.url("/v2"))
        .build()
        .unwrap();

    assert!(client.check_if_email_is_valid("test@example.com").unwrap());
    mock.assert();
}

#[test]
fn injected_http_client_still_sends_the_key() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/email-count")
            .header("x-api-key", API_KEY);
        then.status(200).json_body(email_count_response("example.com", 1));
    });
    let recorder = Recorder::default();
    let client = Client::builder(API_KEY)
        .base_url(server.url("/v2"))
        .http_client(reqwest::blocking::Client::new())
        .hooks(recorder.clone())
        .build()
        .unwrap();

    assert_eq!(client.count_emails_by_domain("example.com").unwrap(), 1);
    mock.assert();
    assert_eq!(
        recorder.events.lock().unwrap().first().unwrap(),
        "before GET /v2/email-count key=true"
    );
}

#[test]
fn injected_key_header_is_marked_sensitive() {
    #[derive(Debug, Default, Clone)]
    struct Sensitivity(Arc<Mutex<Option<bool>>>);

    impl RequestHooks for Sensitivity {
        fn before_request(&self, request: &Request) {
            let sensitive = request
                .headers()
                .get("x-api-key")
                .map(|value| value.is_sensitive());
            *self.0.lock().unwrap() = sensitive;
        }
    }

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v2/email-count");
        then.status(200).json_body(email_count_response("example.com", 1));
    });
    let seen = Sensitivity::default();
    let client = Client::builder(API_KEY)
        .base_url(server.url("/v2"))
        .http_client(reqwest::blocking::Client::new())
        .hooks(seen.clone())
        .build()
        .unwrap();

    client.count_emails_by_domain("example.com").unwrap();
    assert_eq!(*seen.0.lock().unwrap(), Some(true));
}
