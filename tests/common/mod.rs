#![allow(dead_code)]

use httpmock::MockServer;
use hunter_client::{Client, NoopHooks};
use serde_json::{Value, json};

pub const API_KEY: &str = "not_really_an_api_key";

pub fn client(server: &MockServer) -> Client {
    Client::builder(API_KEY)
        .base_url(server.url("/v2"))
        .hooks(NoopHooks)
        .build()
        .unwrap()
}

fn source(domain: &str, uri: &str) -> Value {
    json!({
        "domain": domain,
        "uri": uri,
        "extracted_on": "2015-07-29",
        "last_seen_on": "2017-07-01",
        "still_on_page": true
    })
}

pub fn email_info(address: &str, status: Option<&str>) -> Value {
    json!({
        "value": address,
        "type": "personal",
        "confidence": 95,
        "sources": [source("github.com", "http://github.com/ciaranlee")],
        "first_name": "Contact",
        "last_name": "Person",
        "position": "Support",
        "seniority": "senior",
        "department": "customer_service",
        "linkedin": null,
        "twitter": null,
        "phone_number": null,
        "verification": { "date": "2023-01-01", "status": status }
    })
}

pub fn domain_search_response(domain: &str, emails: Vec<Value>) -> Value {
    let results = emails.len();
    json!({
        "data": {
            "domain": domain,
            "disposable": false,
            "webmail": false,
            "accept_all": false,
            "pattern": "{first}.{last}",
            "organization": "Example Company",
            "description": null,
            "industry": "Information Technology",
            "twitter": null,
            "facebook": null,
            "linkedin": null,
            "instagram": null,
            "youtube": null,
            "technologies": ["react", "sentry"],
            "country": null,
            "state": null,
            "city": null,
            "postal_code": null,
            "street": null,
            "emails": emails,
            "linked_domains": []
        },
        "meta": {
            "results": results,
            "limit": 10,
            "offset": 0,
            "params": {
                "domain": domain,
                "company": null,
                "type": null,
                "seniority": null,
                "department": null
            }
        }
    })
}

pub fn email_finder_response(domain: &str, email: Option<&str>) -> Value {
    let (score, verification) = match email {
        Some(_) => (97, json!({ "date": "2021-06-14", "status": "valid" })),
        None => (0, json!({ "date": null, "status": null })),
    };
    json!({
        "data": {
            "first_name": "John",
            "last_name": "Doe",
            "email": email,
            "score": score,
            "domain": domain,
            "accept_all": false,
            "position": null,
            "twitter": null,
            "linkedin_url": null,
            "phone_number": null,
            "company": null,
            "sources": [],
            "verification": verification
        },
        "meta": {
            "params": {
                "first_name": "John",
                "last_name": "Doe",
                "full_name": null,
                "domain": domain,
                "company": null,
                "max_duration": null
            }
        }
    })
}

pub fn email_verifier_response(email: &str, status: &str) -> Value {
    let result = match status {
        "valid" => "deliverable",
        "accept_all" | "unknown" => "risky",
        _ => "undeliverable",
    };
    let accept_all = status == "accept_all";
    json!({
        "data": {
            "status": status,
            "result": result,
            "score": 100,
            "email": email,
            "regexp": true,
            "gibberish": false,
            "disposable": false,
            "webmail": false,
            "mx_records": true,
            "smtp_server": true,
            "smtp_check": true,
            "accept_all": accept_all,
            "block": false,
            "sources": [source("exampledata.com", "http://exampledata.com/user-profile")]
        },
        "meta": { "params": { "email": email } }
    })
}

pub fn email_count_response(domain: &str, total: u64) -> Value {
    json!({
        "data": {
            "total": total,
            "personal_emails": total,
            "generic_emails": 0,
            "department": {
                "executive": 0, "it": 0, "finance": 0, "management": 0,
                "sales": 0, "legal": 0, "support": 0, "hr": 0,
                "marketing": 0, "communication": 0, "education": 0,
                "design": 0, "health": 0, "operations": 0
            },
            "seniority": { "junior": 0, "senior": 0, "executive": 0 }
        },
        "meta": {
            "params": { "domain": domain, "company": null, "type": null }
        }
    })
}
