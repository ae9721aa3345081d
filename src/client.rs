//! Hunter API client and its builder.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use url::Url;

use crate::endpoints::{DomainSearcher, EmailCounter, EmailFinder, EmailVerifier};
use crate::session::{API_KEY_HEADER, RequestHooks, Session, TracingHooks};
use crate::{Error, Result};

/// Blocking client for the Hunter.io v2 API.
///
/// Holds one handler per endpoint; all of them share a single HTTP
/// connection pool and the API key. Use [`Client::new`] for defaults or
/// [`Client::builder`] for timeouts, proxies, a custom base URL or an
/// injected `reqwest` client.
#[derive(Debug, Clone)]
pub struct Client {
    domain_searcher: DomainSearcher,
    email_finder: EmailFinder,
    email_verifier: EmailVerifier,
    email_counter: EmailCounter,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Create a client with default settings.
    ///
    /// # Examples
    /// ```no_run
    /// # use hunter_client::Client;
    /// # fn main() -> Result<(), hunter_client::Error> {
    /// let client = Client::new("my-api-key")?;
    /// let valid = client.check_if_email_is_valid("john.doe@example.com")?;
    /// println!("{valid}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    /// Create a client with the key from the `HUNTER_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Self::new(key),
            _ => Err(Error::MissingApiKey),
        }
    }

    pub fn domain_searcher(&self) -> &DomainSearcher {
        &self.domain_searcher
    }

    pub fn email_finder(&self) -> &EmailFinder {
        &self.email_finder
    }

    pub fn email_verifier(&self) -> &EmailVerifier {
        &self.email_verifier
    }

    pub fn email_counter(&self) -> &EmailCounter {
        &self.email_counter
    }

    /// Addresses Hunter found under `domain`.
    pub fn search_emails_by_domain(&self, domain: &str) -> Result<Vec<String>> {
        self.domain_searcher.search_emails_by_domain(domain)
    }

    /// Address of a person at `domain`, or `None` if it could not be found.
    pub fn search_email_by_domain_and_name(
        &self,
        domain: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<String>> {
        self.email_finder
            .search_email_by_domain_and_name(domain, first_name, last_name)
    }

    /// Whether Hunter considers `email` valid.
    pub fn check_if_email_is_valid(&self, email: &str) -> Result<bool> {
        self.email_verifier.check_if_email_is_valid(email)
    }

    /// Number of addresses Hunter has for `domain`.
    pub fn count_emails_by_domain(&self, domain: &str) -> Result<u64> {
        self.email_counter.count_emails_by_domain(domain)
    }
}

const BASE_URL: &str = "https://api.hunter.io/v2";
const API_KEY_ENV: &str = "HUNTER_API_KEY";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
const USER_AGENT_VALUE: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring a Hunter client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Clone)]
pub struct ClientBuilder {
    api_key: String,
    timeout: Duration,
    base_url: String,
    proxy: Option<String>,
    user_agent: String,
    danger_accept_invalid_certs: bool,
    http: Option<reqwest::blocking::Client>,
    hooks: Arc<dyn RequestHooks>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - 5 second per-request timeout
    /// - `https://api.hunter.io/v2` as base URL
    /// - No proxy, strict TLS validation
    /// - [`TracingHooks`] for request diagnostics
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            base_url: BASE_URL.to_string(),
            proxy: None,
            user_agent: USER_AGENT_VALUE.to_string(),
            danger_accept_invalid_certs: false,
            http: None,
            hooks: Arc::new(TracingHooks),
        }
    }

    /// Per-request timeout (default: 5 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the API base URL, version segment included.
    ///
    /// Useful for testing against a mock server or routing through a gateway.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080" or "socks5://127.0.0.1:1080").
    ///
    /// Ignored when a client is injected with [`ClientBuilder::http_client`].
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Control whether to accept invalid TLS certificates (default: false).
    pub fn danger_accept_invalid_certs(mut self, value: bool) -> Self {
        self.danger_accept_invalid_certs = value;
        self
    }

    /// Use an existing `reqwest` client instead of building one.
    ///
    /// The API key header and the timeout are then applied to each request.
    pub fn http_client(mut self, http: reqwest::blocking::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Replace the diagnostic request hooks.
    pub fn hooks(mut self, hooks: impl RequestHooks + 'static) -> Self {
        self.hooks = Arc::new(hooks);
        self
    }

    /// Validate the configuration and build the client.
    ///
    /// No request is sent.
    pub fn build(self) -> Result<Client> {
        if self.api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }
        let mut api_key = HeaderValue::from_str(&self.api_key)
            .map_err(|_| Error::Config("API key is not a valid header value".to_string()))?;
        api_key.set_sensitive(true);

        let base_url = Url::parse(&self.base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported base url scheme: {}",
                base_url.scheme()
            )));
        }

        // An injected client knows nothing about the key, so the session adds
        // it per request; our own client carries it as a default header.
        let (http, request_key) = match self.http {
            Some(http) => (http, Some(api_key)),
            None => {
                let mut headers = HeaderMap::new();
                headers.insert(API_KEY_HEADER, api_key);

                let mut builder = reqwest::blocking::Client::builder()
                    .default_headers(headers)
                    .user_agent(self.user_agent)
                    .timeout(self.timeout)
                    .danger_accept_invalid_certs(self.danger_accept_invalid_certs);

                if let Some(proxy_url) = &self.proxy {
                    let proxy = reqwest::Proxy::all(proxy_url)
                        .map_err(|e| Error::Config(format!("invalid proxy `{proxy_url}`: {e}")))?;
                    builder = builder.proxy(proxy);
                }

                let http = builder
                    .build()
                    .map_err(|e| Error::Config(format!("cannot build http client: {e}")))?;
                (http, None)
            }
        };

        let session = Session::new(http, base_url, request_key, self.timeout, self.hooks);

        Ok(Client {
            domain_searcher: DomainSearcher::new(session.clone()),
            email_finder: EmailFinder::new(session.clone()),
            email_verifier: EmailVerifier::new(session.clone()),
            email_counter: EmailCounter::new(session),
        })
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("timeout", &self.timeout)
            .field("base_url", &self.base_url)
            .field("proxy", &self.proxy)
            .field("user_agent", &self.user_agent)
            .field("danger_accept_invalid_certs", &self.danger_accept_invalid_certs)
            .field("http", &self.http.is_some())
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}
