//! Shared transport used by every endpoint handler.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::StatusCode;
use reqwest::blocking::{Request, Response};
use reqwest::header::HeaderValue;
use tracing::debug;
use url::Url;

use crate::Result;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Observation points around each request, for diagnostics.
///
/// Hooks see the request and response by shared reference only and cannot
/// fail. Both methods default to doing nothing.
pub trait RequestHooks: Send + Sync + fmt::Debug {
    fn before_request(&self, _request: &Request) {}

    fn after_response(&self, _response: &Response, _elapsed: Duration) {}
}

/// Logs each request and response at `debug` level through `tracing`.
///
/// This is the default. Only method, URL, status and timing are logged; the
/// API key travels in a header and never appears.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHooks;

impl RequestHooks for TracingHooks {
    fn before_request(&self, request: &Request) {
        debug!(method = %request.method(), url = %request.url(), "sending hunter request");
    }

    fn after_response(&self, response: &Response, elapsed: Duration) {
        debug!(
            status = %response.status(),
            url = %response.url(),
            elapsed_ms = elapsed.as_millis() as u64,
            "received hunter response"
        );
    }
}

/// Hooks that do nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

impl RequestHooks for NoopHooks {}

/// Query parameters understood by the Hunter endpoints.
///
/// Unset fields are left out of the query string entirely.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QueryParams<'a> {
    pub domain: Option<&'a str>,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub email: Option<&'a str>,
}

impl<'a> QueryParams<'a> {
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &'a str)> {
        [
            ("domain", self.domain),
            ("first_name", self.first_name),
            ("last_name", self.last_name),
            ("email", self.email),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// HTTP client, base URL, credentials and timeout shared by the handlers.
///
/// Cloning is cheap; clones reuse the same connection pool.
#[derive(Clone)]
pub struct Session {
    http: reqwest::blocking::Client,
    base_url: Url,
    /// Set only when `http` does not already send the key as a default header.
    api_key: Option<HeaderValue>,
    timeout: Duration,
    hooks: Arc<dyn RequestHooks>,
}

impl Session {
    pub(crate) fn new(
        http: reqwest::blocking::Client,
        base_url: Url,
        api_key: Option<HeaderValue>,
        timeout: Duration,
        hooks: Arc<dyn RequestHooks>,
    ) -> Self {
        Self {
            http,
            base_url,
            api_key,
            timeout,
            hooks,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Issue a blocking GET and read the whole body.
    ///
    /// Non-2xx statuses are returned as-is; only transport failures error.
    pub fn get(&self, url: Url) -> Result<RawResponse> {
        let mut builder = self.http.get(url).timeout(self.timeout);
        if let Some(api_key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, api_key.clone());
        }
        let request = builder.build()?;

        self.hooks.before_request(&request);
        let started = Instant::now();
        let response = self.http.execute(request)?;
        self.hooks.after_response(&response, started.elapsed());

        let status = response.status();
        let body = response.text()?;
        Ok(RawResponse { status, body })
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}
