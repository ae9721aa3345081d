//! Builds model graphs from validated response records.

use crate::{
    Result,
    models::{
        Domain, DomainId, DomainStats, Email, EmailId, EmailStatus, Mapped, ModelGraph, Person,
        StatsId,
    },
    responses::{
        DomainSearchResponse, EmailCountResponse, EmailFinderResponse, EmailVerifierResponse,
        VerificationInfo,
    },
};

fn status_of(verification: &VerificationInfo) -> EmailStatus {
    verification.status.clone().unwrap_or(EmailStatus::Unknown)
}

/// One [`Domain`] with its address list populated.
///
/// Repeated addresses in the response are attached once.
pub fn domain_from_search(resp: &DomainSearchResponse) -> Result<Mapped<DomainId>> {
    let mut graph = ModelGraph::new();
    let domain = graph.insert_domain(Domain::new(&resp.data.domain));
    graph.init_emails(domain);

    for info in &resp.data.emails {
        let email = graph.insert_email(Email::new(
            info.value.as_str(),
            status_of(&info.verification),
        ));
        graph.add_email(domain, email)?;
    }

    Ok(Mapped::new(graph, domain))
}

/// The found [`Email`], linked to its owner and domain.
///
/// `None` when Hunter could not work out the address or the person's name.
pub fn email_from_finder(resp: &EmailFinderResponse) -> Result<Option<Mapped<EmailId>>> {
    let data = &resp.data;
    let (Some(first_name), Some(last_name), Some(address)) =
        (&data.first_name, &data.last_name, &data.email)
    else {
        return Ok(None);
    };

    let mut graph = ModelGraph::new();
    let domain = graph.insert_domain(Domain::new(&data.domain));
    let owner = graph.insert_person(Person::new(first_name, last_name));
    let email = graph.insert_email(Email::new(
        address.as_str(),
        status_of(&data.verification),
    ));

    graph.init_emails(domain);
    graph.add_email(domain, email)?;
    graph.link_owner(email, owner);

    Ok(Some(Mapped::new(graph, email)))
}

/// A bare [`Email`]; the verifier says nothing about owner or domain.
pub fn email_from_verifier(resp: &EmailVerifierResponse) -> Mapped<EmailId> {
    let mut graph = ModelGraph::new();
    let email = graph.insert_email(Email::new(
        resp.data.email.as_str(),
        resp.data.status.clone(),
    ));
    Mapped::new(graph, email)
}

/// [`DomainStats`] linked to the domain named in `meta.params`.
pub fn stats_from_count(resp: &EmailCountResponse) -> Mapped<StatsId> {
    let mut graph = ModelGraph::new();
    let domain = graph.insert_domain(Domain::new(&resp.meta.params.domain));
    let stats = graph.insert_stats(DomainStats::new(resp.data.total));
    graph.link_stats(domain, stats);
    Mapped::new(graph, stats)
}
