//! Typed records for Hunter response bodies.
//!
//! Every body is a `data` block plus a `meta` block echoing the request.
//! Nullable fields stay `Option`; a missing required field, a malformed
//! address, URL or date fails deserialization and surfaces as
//! [`Error::Schema`](crate::Error::Schema).

mod components;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::models::EmailStatus;
use crate::{Error, Result};

pub use components::{
    DepartmentCounts, EmailAddress, EmailInfo, InformationSource, InvalidEmailAddress,
    SeniorityCounts, VerificationInfo,
};

/// Validate a raw body against the record for `endpoint`.
pub(crate) fn parse<T: DeserializeOwned>(endpoint: &'static str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| Error::Schema { endpoint, source })
}

/// Body of `/domain-search`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DomainSearchResponse {
    pub data: DomainSearchData,
    pub meta: DomainSearchMeta,
}

impl DomainSearchResponse {
    /// Addresses exactly as listed, duplicates included.
    pub fn bare_emails(&self) -> Vec<&str> {
        self.data.emails.iter().map(|e| e.value.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DomainSearchData {
    pub domain: String,
    pub disposable: Option<bool>,
    pub webmail: Option<bool>,
    pub accept_all: Option<bool>,
    pub pattern: Option<String>,
    pub organization: Option<String>,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub technologies: Vec<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub emails: Vec<EmailInfo>,
    pub linked_domains: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DomainSearchMeta {
    pub results: u32,
    pub limit: u32,
    pub offset: u32,
    pub params: DomainSearchParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DomainSearchParams {
    pub domain: String,
    pub company: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub seniority: Option<String>,
    pub department: Option<String>,
}

/// Body of `/email-finder`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailFinderResponse {
    pub data: EmailFinderData,
    pub meta: EmailFinderMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailFinderData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<EmailAddress>,
    pub score: Option<u32>,
    pub domain: String,
    pub accept_all: Option<bool>,
    pub position: Option<String>,
    pub twitter: Option<String>,
    pub linkedin_url: Option<Url>,
    pub phone_number: Option<String>,
    pub company: Option<String>,
    pub sources: Vec<InformationSource>,
    pub verification: VerificationInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailFinderMeta {
    pub params: EmailFinderParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailFinderParams {
    pub first_name: String,
    pub last_name: String,
    pub full_name: Option<String>,
    pub domain: String,
    pub company: Option<String>,
    pub max_duration: Option<u32>,
}

/// Body of `/email-verifier`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailVerifierResponse {
    pub data: EmailVerifierData,
    pub meta: Option<EmailVerifierMeta>,
}

impl EmailVerifierResponse {
    /// `true` only for the `valid` status; `accept_all` and friends are not.
    pub fn is_valid(&self) -> bool {
        self.data.status == EmailStatus::Valid
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailVerifierData {
    pub status: EmailStatus,
    pub result: Option<String>,
    pub score: Option<u32>,
    pub email: EmailAddress,
    pub regexp: Option<bool>,
    pub gibberish: Option<bool>,
    pub disposable: Option<bool>,
    pub webmail: Option<bool>,
    pub mx_records: Option<bool>,
    pub smtp_server: Option<bool>,
    pub smtp_check: Option<bool>,
    pub accept_all: Option<bool>,
    pub block: Option<bool>,
    pub sources: Vec<InformationSource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailVerifierMeta {
    pub params: EmailVerifierParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailVerifierParams {
    pub email: EmailAddress,
}

/// Body of `/email-count`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailCountResponse {
    pub data: EmailCountData,
    pub meta: EmailCountMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailCountData {
    pub total: u64,
    pub personal_emails: u64,
    pub generic_emails: u64,
    pub department: DepartmentCounts,
    pub seniority: SeniorityCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailCountMeta {
    pub params: EmailCountParams,
}

/// The domain name of a count lives only here, not in `data`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailCountParams {
    pub domain: String,
    pub company: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
