//! Flattening of mapped models into the plain values the client returns.

use crate::models::{DomainId, Mapped, UninitializedRelationError};

/// Addresses attached to the mapped domain, in response order.
pub fn bare_email_addresses(
    domain: &Mapped<DomainId>,
) -> Result<Vec<String>, UninitializedRelationError> {
    Ok(domain
        .graph()
        .emails_of(domain.root())?
        .into_iter()
        .map(|email| email.address.clone())
        .collect())
}
