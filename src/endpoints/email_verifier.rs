//! `/email-verifier`: deliverability of a single address.

use super::EndpointHandler;
use crate::models::{EmailId, Mapped};
use crate::responses::EmailVerifierResponse;
use crate::session::{QueryParams, Session};
use crate::{Result, mapper};

/// Handler for the `email-verifier` endpoint.
///
/// See <https://hunter.io/api-documentation/v2#email-verifier>.
#[derive(Debug, Clone)]
pub struct EmailVerifier {
    session: Session,
}

impl EndpointHandler for EmailVerifier {
    const PATH: &'static str = "/email-verifier";
    type Response = EmailVerifierResponse;

    fn session(&self) -> &Session {
        &self.session
    }
}

impl EmailVerifier {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn fetch(&self, email: &str) -> Result<EmailVerifierResponse> {
        self.request(&QueryParams {
            email: Some(email),
            ..Default::default()
        })
    }

    /// The verified address. Owner and domain stay uninitialized.
    pub fn verify_email(&self, email: &str) -> Result<Mapped<EmailId>> {
        Ok(mapper::email_from_verifier(&self.fetch(email)?))
    }

    /// `true` only when Hunter rates the address `valid`.
    pub fn check_if_email_is_valid(&self, email: &str) -> Result<bool> {
        Ok(self.fetch(email)?.is_valid())
    }
}
