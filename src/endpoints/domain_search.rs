//! `/domain-search`: every address Hunter knows for a domain.

use super::EndpointHandler;
use crate::models::{DomainId, Mapped};
use crate::responses::DomainSearchResponse;
use crate::session::{QueryParams, Session};
use crate::{Result, mapper, presenter};

/// Handler for the `domain-search` endpoint.
///
/// See <https://hunter.io/api-documentation/v2#domain-search>.
#[derive(Debug, Clone)]
pub struct DomainSearcher {
    session: Session,
}

impl EndpointHandler for DomainSearcher {
    const PATH: &'static str = "/domain-search";
    type Response = DomainSearchResponse;

    fn session(&self) -> &Session {
        &self.session
    }
}

impl DomainSearcher {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Validated response body for `domain`.
    pub fn fetch(&self, domain: &str) -> Result<DomainSearchResponse> {
        self.request(&QueryParams {
            domain: Some(domain),
            ..Default::default()
        })
    }

    /// The domain with its addresses attached.
    pub fn search_domain(&self, domain: &str) -> Result<Mapped<DomainId>> {
        mapper::domain_from_search(&self.fetch(domain)?)
    }

    /// Addresses found under `domain`; empty when Hunter found none.
    ///
    /// # Examples
    /// ```no_run
    /// # use hunter_client::Client;
    /// # fn main() -> Result<(), hunter_client::Error> {
    /// let client = Client::new("my-api-key")?;
    /// for address in client.domain_searcher().search_emails_by_domain("example.com")? {
    ///     println!("{address}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn search_emails_by_domain(&self, domain: &str) -> Result<Vec<String>> {
        let mapped = self.search_domain(domain)?;
        Ok(presenter::bare_email_addresses(&mapped)?)
    }
}
