use std::fmt;

use serde::{Deserialize, Serialize};

use super::graph::{DomainId, EmailId, PersonId, StatsId};
use super::lateinit::{LateInit, UninitializedRelationError};

/// Deliverability status Hunter assigns to an address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EmailStatus {
    Valid,
    Invalid,
    AcceptAll,
    Webmail,
    Disposable,
    /// Also used when the API reports no status at all.
    Unknown,
    /// A status this crate does not know about yet.
    Other(String),
}

impl EmailStatus {
    pub fn as_str(&self) -> &str {
        match self {
            EmailStatus::Valid => "valid",
            EmailStatus::Invalid => "invalid",
            EmailStatus::AcceptAll => "accept_all",
            EmailStatus::Webmail => "webmail",
            EmailStatus::Disposable => "disposable",
            EmailStatus::Unknown => "unknown",
            EmailStatus::Other(s) => s,
        }
    }
}

impl From<&str> for EmailStatus {
    fn from(s: &str) -> Self {
        match s {
            "valid" => EmailStatus::Valid,
            "invalid" => EmailStatus::Invalid,
            "accept_all" => EmailStatus::AcceptAll,
            "webmail" => EmailStatus::Webmail,
            "disposable" => EmailStatus::Disposable,
            "unknown" => EmailStatus::Unknown,
            other => EmailStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for EmailStatus {
    fn from(s: String) -> Self {
        EmailStatus::from(s.as_str())
    }
}

impl From<EmailStatus> for String {
    fn from(status: EmailStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for EmailStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An Internet domain and whatever Hunter told us about it.
///
/// `emails` being uninitialized and `emails` being empty are different
/// states: the first means the response did not cover the domain's
/// addresses, the second means it did and found none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    pub name: String,
    pub(crate) emails: LateInit<Vec<EmailId>>,
    pub(crate) stats: LateInit<StatsId>,
}

impl Domain {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emails: LateInit::new("Domain.emails"),
            stats: LateInit::new("Domain.stats"),
        }
    }

    pub fn email_ids(&self) -> Result<&[EmailId], UninitializedRelationError> {
        self.emails.get().map(Vec::as_slice)
    }

    pub fn stats_id(&self) -> Result<StatsId, UninitializedRelationError> {
        self.stats.get().copied()
    }

    pub fn has_known_emails(&self) -> bool {
        self.emails.is_initialized()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub address: String,
    pub status: EmailStatus,
    pub(crate) owner: LateInit<PersonId>,
    pub(crate) domain: LateInit<DomainId>,
}

impl Email {
    pub fn new(address: impl Into<String>, status: EmailStatus) -> Self {
        Self {
            address: address.into(),
            status,
            owner: LateInit::new("Email.owner"),
            domain: LateInit::new("Email.domain"),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status == EmailStatus::Valid
    }

    pub fn owner_id(&self) -> Result<PersonId, UninitializedRelationError> {
        self.owner.get().copied()
    }

    pub fn domain_id(&self) -> Result<DomainId, UninitializedRelationError> {
        self.domain.get().copied()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub(crate) email: LateInit<EmailId>,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: LateInit::new("Person.email"),
        }
    }

    pub fn email_id(&self) -> Result<EmailId, UninitializedRelationError> {
        self.email.get().copied()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Aggregate counts for a domain, from `/email-count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStats {
    pub total_emails_count: u64,
    pub(crate) domain: LateInit<DomainId>,
}

impl DomainStats {
    pub fn new(total_emails_count: u64) -> Self {
        Self {
            total_emails_count,
            domain: LateInit::new("DomainStats.domain"),
        }
    }

    pub fn domain_id(&self) -> Result<DomainId, UninitializedRelationError> {
        self.domain.get().copied()
    }
}
