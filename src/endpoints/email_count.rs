//! `/email-count`: how many addresses Hunter has for a domain.

use super::EndpointHandler;
use crate::models::{Mapped, StatsId};
use crate::responses::EmailCountResponse;
use crate::session::{QueryParams, Session};
use crate::{Result, mapper};

/// Handler for the `email-count` endpoint.
///
/// See <https://hunter.io/api-documentation/v2#email-count>.
#[derive(Debug, Clone)]
pub struct EmailCounter {
    session: Session,
}

impl EndpointHandler for EmailCounter {
    const PATH: &'static str = "/email-count";
    type Response = EmailCountResponse;

    fn session(&self) -> &Session {
        &self.session
    }
}

impl EmailCounter {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Queried by `domain`; this endpoint does not take an `email` parameter.
    pub fn fetch(&self, domain: &str) -> Result<EmailCountResponse> {
        self.request(&QueryParams {
            domain: Some(domain),
            ..Default::default()
        })
    }

    /// Stats linked to the domain they describe.
    pub fn domain_stats(&self, domain: &str) -> Result<Mapped<StatsId>> {
        Ok(mapper::stats_from_count(&self.fetch(domain)?))
    }

    pub fn count_emails_by_domain(&self, domain: &str) -> Result<u64> {
        Ok(self.domain_stats(domain)?.stats().total_emails_count)
    }
}
