//! One handler per Hunter endpoint.
//!
//! Handlers share URL building, status dispatch and schema validation
//! through [`EndpointHandler`]; each one only supplies its path, its query
//! parameters and how its response becomes a plain value.

mod domain_search;
mod email_count;
mod email_finder;
mod email_verifier;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::session::{QueryParams, RawResponse, Session};
use crate::{ApiError, Error, Result, responses};

pub use domain_search::DomainSearcher;
pub use email_count::EmailCounter;
pub use email_finder::EmailFinder;
pub use email_verifier::EmailVerifier;

/// Shared behavior of the endpoint handlers.
pub trait EndpointHandler {
    /// Path below the API base, e.g. `/domain-search`.
    const PATH: &'static str;

    /// Validated shape of a successful response body.
    type Response: DeserializeOwned;

    fn session(&self) -> &Session;

    /// Base URL + [`Self::PATH`] + URL-encoded query.
    fn build_url(&self, params: &QueryParams<'_>) -> Result<Url> {
        let mut url = self.session().base_url().clone();
        if url.cannot_be_a_base() {
            return Err(Error::Config(format!("base url `{url}` cannot hold a path")));
        }
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(Self::PATH.trim_start_matches('/'));
        }

        let mut pairs = params.pairs().peekable();
        if pairs.peek().is_some() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    /// Turn a non-2xx status into the matching [`ApiError`].
    fn dispatch_errors(status: StatusCode, body: &str) -> Result<()> {
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::from_response(status, body).into())
        }
    }

    /// Request, check status, validate the body.
    fn request(&self, params: &QueryParams<'_>) -> Result<Self::Response> {
        let url = self.build_url(params)?;
        let RawResponse { status, body } = self.session().get(url)?;
        Self::dispatch_errors(status, &body)?;
        responses::parse(Self::PATH, &body)
    }
}
