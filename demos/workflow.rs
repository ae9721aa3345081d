//! Search a few domains, keep the results in memory, then verify what was found.
//!
//! Run with `HUNTER_API_KEY=... RUST_LOG=hunter_client=debug cargo run --example workflow`.

use hunter_client::{
    ApiError, Client, Error, InMemoryStorage, PersistentEmailValidationService, ResultsStorage,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hunter_client=info")),
        )
        .compact()
        .init();

    let client = Client::from_env()?;
    let mut emails_by_domain = InMemoryStorage::<String, Vec<String>>::new();

    for domain in ["example.com", "anotherdomain.com", "nonexistent.com"] {
        match client.search_emails_by_domain(domain) {
            Ok(emails) => {
                println!("Emails found for {domain}: {emails:?}");
                emails_by_domain.set(domain.to_string(), emails);
            }
            Err(Error::Api(ApiError::InvalidInput { .. })) => {
                println!("Invalid input for domain: {domain}");
            }
            Err(Error::Api(ApiError::TooManyRequests { .. })) => {
                println!("Too many requests. Please try again later.");
            }
            Err(e) => println!("Lookup for {domain} failed: {e}"),
        }

        match emails_by_domain.get(&domain.to_string()) {
            Some(stored) if !stored.is_empty() => println!("Stored emails for {domain}: {stored:?}"),
            _ => println!("No emails stored for {domain}"),
        }
    }

    let mut validation = PersistentEmailValidationService::new(&client, InMemoryStorage::new());
    if let Some(emails) = emails_by_domain.get(&"example.com".to_string()) {
        for email in &emails {
            let valid = validation.validate_and_store(email)?;
            println!("{email}: {}", if valid { "valid" } else { "not valid" });
        }
    }

    Ok(())
}
