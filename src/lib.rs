//! # Hunter Client
//! Blocking, typed wrapper around the [Hunter.io](https://hunter.io/api-documentation/v2) email discovery API: domain search, email finder, email verifier and email count, through [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust developers who need to look up or verify business email addresses from scripts, back-office jobs or CLIs: configure with [`ClientBuilder`], call one of the four endpoints, and optionally record verdicts with [`PersistentEmailValidationService`] and any [`ResultsStorage`].
//!
//! ## Runtime requirements
//! Synchronous. Each call blocks on one HTTP request via `reqwest`'s blocking client, so do not call it from inside an async runtime's worker threads; use `spawn_blocking` there.
//!
//! ## Out of scope
//! No retries, rate-limit backoff, pagination or batching. A 429 is reported as [`ApiError::TooManyRequests`] and left to the caller.
//!
//! ## Errors
//! Non-2xx statuses become [`Error::Api`] ([`ApiError::InvalidInput`] for 400, [`ApiError::TooManyRequests`] for 429, [`ApiError::Server`] for 500, [`ApiError::Other`] otherwise). Bodies that do not match the expected shape become [`Error::Schema`]. Transport failures are passed through in [`Error::Transport`]. Reading a model relation the response did not populate yields [`Error::Uninitialized`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Diagnostics
//! Requests are logged at `debug` level through `tracing` by the default [`TracingHooks`]; install [`NoopHooks`] or your own [`RequestHooks`] with [`ClientBuilder::hooks`].
//!
//! ## Example
//! ```no_run
//! use hunter_client::{ApiError, Client, Error};
//!
//! fn main() -> Result<(), hunter_client::Error> {
//!     let client = Client::new("my-api-key")?;
//!
//!     match client.search_emails_by_domain("example.com") {
//!         Ok(emails) => println!("Found: {emails:?}"),
//!         Err(Error::Api(ApiError::TooManyRequests { .. })) => println!("Slow down"),
//!         Err(e) => return Err(e),
//!     }
//!
//!     let total = client.count_emails_by_domain("example.com")?;
//!     println!("Hunter knows {total} addresses");
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
mod error;
mod mapper;
pub mod models;
mod presenter;
pub mod responses;
mod service;
mod session;
mod storage;

pub use client::{Client, ClientBuilder};
pub use endpoints::{DomainSearcher, EmailCounter, EmailFinder, EmailVerifier, EndpointHandler};
pub use error::{ApiError, Error};
pub use service::PersistentEmailValidationService;
pub use session::{
    API_KEY_HEADER, NoopHooks, QueryParams, RawResponse, RequestHooks, Session, TracingHooks,
};
pub use storage::{InMemoryStorage, ResultsStorage};

/// Result type alias for Hunter operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
