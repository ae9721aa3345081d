//! Services composing API calls with result storage.

use crate::endpoints::EmailVerifier;
use crate::storage::ResultsStorage;
use crate::{Client, Result};

/// Verifies addresses and records each verdict in a [`ResultsStorage`].
///
/// Every call hits the API: stored verdicts are never consulted before a
/// request, and a repeated address simply overwrites its entry.
#[derive(Debug)]
pub struct PersistentEmailValidationService<S> {
    verifier: EmailVerifier,
    storage: S,
}

impl<S: ResultsStorage<String, bool>> PersistentEmailValidationService<S> {
    /// Build the service on top of an existing client's verifier.
    pub fn new(client: &Client, storage: S) -> Self {
        Self {
            verifier: client.email_verifier().clone(),
            storage,
        }
    }

    /// Build the service with a default client for `api_key`.
    pub fn from_api_key(api_key: impl Into<String>, storage: S) -> Result<Self> {
        Ok(Self::new(&Client::new(api_key)?, storage))
    }

    /// Verify `email`, store the verdict under it and return the verdict.
    ///
    /// Nothing is stored when verification fails.
    ///
    /// # Examples
    /// ```no_run
    /// # use hunter_client::{InMemoryStorage, PersistentEmailValidationService, ResultsStorage};
    /// # fn main() -> Result<(), hunter_client::Error> {
    /// let mut service =
    ///     PersistentEmailValidationService::from_api_key("my-api-key", InMemoryStorage::new())?;
    /// let valid = service.validate_and_store("john.doe@example.com")?;
    /// assert_eq!(service.storage().get(&"john.doe@example.com".to_string()), Some(valid));
    /// # Ok(())
    /// # }
    /// ```
    pub fn validate_and_store(&mut self, email: &str) -> Result<bool> {
        let valid = self.verifier.check_if_email_is_valid(email)?;
        self.storage.set(email.to_string(), valid);
        Ok(valid)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
