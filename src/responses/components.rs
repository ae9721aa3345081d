//! Nested parts of Hunter response bodies.

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::models::EmailStatus;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .unwrap()
});

/// A syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

/// The string was not a plausible email address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a valid email address")]
pub struct InvalidEmailAddress(pub String);

impl EmailAddress {
    pub fn parse(s: impl Into<String>) -> Result<Self, InvalidEmailAddress> {
        let s = s.into();
        if s.len() <= 254 && EMAIL_RE.is_match(&s) {
            Ok(Self(s))
        } else {
            Err(InvalidEmailAddress(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = InvalidEmailAddress;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<EmailAddress> for String {
    fn from(address: EmailAddress) -> Self {
        address.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A page where Hunter found an address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InformationSource {
    pub domain: String,
    pub uri: Url,
    pub extracted_on: NaiveDate,
    pub last_seen_on: NaiveDate,
    pub still_on_page: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerificationInfo {
    pub date: Option<NaiveDate>,
    pub status: Option<EmailStatus>,
}

/// One address in a `/domain-search` result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailInfo {
    pub value: EmailAddress,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub confidence: Option<u32>,
    pub sources: Vec<InformationSource>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub seniority: Option<String>,
    pub department: Option<String>,
    pub linkedin: Option<Url>,
    pub twitter: Option<String>,
    pub phone_number: Option<String>,
    pub verification: VerificationInfo,
}

/// Address counts per department, from `/email-count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DepartmentCounts {
    pub executive: u64,
    pub it: u64,
    pub finance: u64,
    pub management: u64,
    pub sales: u64,
    pub legal: u64,
    pub support: u64,
    pub hr: u64,
    pub marketing: u64,
    pub communication: u64,
    pub education: u64,
    pub design: u64,
    pub health: u64,
    pub operations: u64,
}

/// Address counts per seniority level, from `/email-count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SeniorityCounts {
    pub junior: u64,
    pub senior: u64,
    pub executive: u64,
}
