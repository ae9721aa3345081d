mod common;

use std::time::Duration;

use httpmock::prelude::*;
use hunter_client::{ApiError, Client, Error, NoopHooks, Result};
use reqwest::StatusCode;

use common::*;

/// Run each of the four endpoints against a server answering every path with `status`.
fn every_endpoint(status: u16, body: &str) -> Vec<Error> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(status).body(body);
    });
    let client = client(&server);

    let results: Vec<Result<()>> = vec![
        client.search_emails_by_domain("example.com").map(drop),
        client
            .search_email_by_domain_and_name("example.com", "John", "Doe")
            .map(drop),
        client.check_if_email_is_valid("test@example.com").map(drop),
        client.count_emails_by_domain("example.com").map(drop),
    ];
    results.into_iter().map(|r| r.unwrap_err()).collect()
}

#[test]
fn bad_request_is_invalid_input() {
    for err in every_endpoint(400, "") {
        assert!(matches!(err, Error::Api(ApiError::InvalidInput { .. })), "{err:?}");
    }
}

#[test]
fn too_many_requests() {
    for err in every_endpoint(429, "") {
        assert!(matches!(err, Error::Api(ApiError::TooManyRequests { .. })), "{err:?}");
    }
}

#[test]
fn internal_server_error_is_server() {
    for err in every_endpoint(500, "") {
        assert!(matches!(err, Error::Api(ApiError::Server { .. })), "{err:?}");
    }
}

#[test]
fn other_statuses_are_generic() {
    for status in [401, 403, 404, 418, 451, 502, 503] {
        for err in every_endpoint(status, "") {
            let api = err.api_error().expect("status errors are api errors");
            assert!(matches!(api, ApiError::Other { .. }), "{err:?}");
            assert_eq!(api.status().as_u16(), status);
        }
    }
}

#[test]
fn body_content_does_not_change_the_kind() {
    let body = r#"{"errors":[{"id":"wrong_params","code":400,"details":"You are missing the domain parameter"}]}"#;
    for err in every_endpoint(429, body) {
        assert!(matches!(err, Error::Api(ApiError::TooManyRequests { .. })));
    }
    for err in every_endpoint(400, body) {
        let api = err.api_error().unwrap();
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert_eq!(api.details(), Some("You are missing the domain parameter"));
    }
}

#[test]
fn a_status_error_with_a_valid_body_is_still_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v2/email-count");
        then.status(500).json_body(email_count_response("example.com", 3));
    });

    let err = client(&server).count_emails_by_domain("example.com").unwrap_err();
    assert!(matches!(err, Error::Api(ApiError::Server { .. })));
}

#[test]
fn unexpected_shape_is_a_schema_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v2/email-verifier");
        then.status(200).json_body(serde_json::json!({ "data": { "result": "deliverable" } }));
    });

    let err = client(&server).check_if_email_is_valid("test@example.com").unwrap_err();
    assert!(matches!(
        err,
        Error::Schema {
            endpoint: "/email-verifier",
            ..
        }
    ));
}

#[test]
fn non_json_success_body_is_a_schema_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v2/domain-search");
        then.status(200).body("<html>maintenance</html>");
    });

    let err = client(&server).search_emails_by_domain("example.com").unwrap_err();
    assert!(matches!(err, Error::Schema { .. }));
}

#[test]
fn invalid_email_in_response_is_a_schema_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v2/email-finder");
        then.status(200)
            .json_body(email_finder_response("example.com", Some("john.doe-at-example.com")));
    });

    let err = client(&server)
        .search_email_by_domain_and_name("example.com", "John", "Doe")
        .unwrap_err();
    assert!(matches!(err, Error::Schema { .. }));
}

#[test]
fn connection_failure_is_a_transport_error() {
    let client = Client::builder(API_KEY)
        .base_url("http://127.0.0.1:1/v2")
        .timeout(Duration::from_secs(2))
        .hooks(NoopHooks)
        .build()
        .unwrap();

    let err = client.count_emails_by_domain("example.com").unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "{err:?}");
}
