//! `/email-finder`: the most likely address for a person at a domain.

use super::EndpointHandler;
use crate::models::{EmailId, Mapped};
use crate::responses::{EmailAddress, EmailFinderResponse};
use crate::session::{QueryParams, Session};
use crate::{Result, mapper};

/// Handler for the `email-finder` endpoint.
///
/// See <https://hunter.io/api-documentation/v2#email-finder>.
#[derive(Debug, Clone)]
pub struct EmailFinder {
    session: Session,
}

impl EndpointHandler for EmailFinder {
    const PATH: &'static str = "/email-finder";
    type Response = EmailFinderResponse;

    fn session(&self) -> &Session {
        &self.session
    }
}

impl EmailFinder {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn fetch(
        &self,
        domain: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<EmailFinderResponse> {
        self.request(&QueryParams {
            domain: Some(domain),
            first_name: Some(first_name),
            last_name: Some(last_name),
            email: None,
        })
    }

    /// The found address linked to its owner and domain, or `None`.
    pub fn find_email(
        &self,
        domain: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Mapped<EmailId>>> {
        mapper::email_from_finder(&self.fetch(domain, first_name, last_name)?)
    }

    /// The address of `first_name last_name` at `domain`, if Hunter found one.
    ///
    /// Only `data.email` decides the result; a missing name in the response
    /// does not hide a found address.
    ///
    /// # Examples
    /// ```no_run
    /// # use hunter_client::Client;
    /// # fn main() -> Result<(), hunter_client::Error> {
    /// let client = Client::new("my-api-key")?;
    /// match client.email_finder().search_email_by_domain_and_name("example.com", "John", "Doe")? {
    ///     Some(address) => println!("found {address}"),
    ///     None => println!("no address found"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn search_email_by_domain_and_name(
        &self,
        domain: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<String>> {
        Ok(self
            .fetch(domain, first_name, last_name)?
            .data
            .email
            .map(EmailAddress::into_string))
    }
}
