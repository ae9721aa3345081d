//! Arena holding the entities built from one API response.
//!
//! Cross references between [`Domain`], [`Email`], [`Person`] and
//! [`DomainStats`] are typed indices into the arena, so the small cyclic
//! graph a response describes needs no shared ownership.

use super::entities::{Domain, DomainStats, Email, Person};
use super::lateinit::UninitializedRelationError;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(usize);
    };
}

arena_id!(
    /// Index of a [`Domain`] in a [`ModelGraph`].
    DomainId
);
arena_id!(
    /// Index of an [`Email`] in a [`ModelGraph`].
    EmailId
);
arena_id!(
    /// Index of a [`Person`] in a [`ModelGraph`].
    PersonId
);
arena_id!(
    /// Index of a [`DomainStats`] in a [`ModelGraph`].
    StatsId
);

/// Owner of every entity built in a single mapping pass.
///
/// Ids are only meaningful for the graph that issued them; indexing a graph
/// with another graph's id panics or returns an unrelated entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelGraph {
    domains: Vec<Domain>,
    emails: Vec<Email>,
    persons: Vec<Person>,
    stats: Vec<DomainStats>,
}

impl ModelGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_domain(&mut self, domain: Domain) -> DomainId {
        self.domains.push(domain);
        DomainId(self.domains.len() - 1)
    }

    pub fn insert_email(&mut self, email: Email) -> EmailId {
        self.emails.push(email);
        EmailId(self.emails.len() - 1)
    }

    pub fn insert_person(&mut self, person: Person) -> PersonId {
        self.persons.push(person);
        PersonId(self.persons.len() - 1)
    }

    pub fn insert_stats(&mut self, stats: DomainStats) -> StatsId {
        self.stats.push(stats);
        StatsId(self.stats.len() - 1)
    }

    pub fn domain(&self, id: DomainId) -> &Domain {
        &self.domains[id.0]
    }

    pub fn email(&self, id: EmailId) -> &Email {
        &self.emails[id.0]
    }

    pub fn person(&self, id: PersonId) -> &Person {
        &self.persons[id.0]
    }

    pub fn stats(&self, id: StatsId) -> &DomainStats {
        &self.stats[id.0]
    }

    /// Mark the domain's address list as known (possibly empty).
    pub fn init_emails(&mut self, domain: DomainId) {
        let slot = &mut self.domains[domain.0].emails;
        if !slot.is_initialized() {
            slot.set(Vec::new());
        }
    }

    /// Attach `email` to `domain` and point the email back at it.
    ///
    /// An address already present on the domain is left alone and `false` is
    /// returned. Fails if the domain's address list was never initialized.
    pub fn add_email(
        &mut self,
        domain: DomainId,
        email: EmailId,
    ) -> Result<bool, UninitializedRelationError> {
        let address = &self.emails[email.0].address;
        let known = self.domains[domain.0].emails.get()?;
        if known.iter().any(|id| self.emails[id.0].address == *address) {
            return Ok(false);
        }

        self.domains[domain.0].emails.get_mut()?.push(email);
        self.emails[email.0].domain.set(domain);
        Ok(true)
    }

    /// Link an email and its owner in both directions.
    pub fn link_owner(&mut self, email: EmailId, person: PersonId) {
        self.emails[email.0].owner.set(person);
        self.persons[person.0].email.set(email);
    }

    /// Link a domain and its stats in both directions.
    pub fn link_stats(&mut self, domain: DomainId, stats: StatsId) {
        self.domains[domain.0].stats.set(stats);
        self.stats[stats.0].domain.set(domain);
    }

    /// Emails attached to `domain`, in insertion order.
    pub fn emails_of(&self, domain: DomainId) -> Result<Vec<&Email>, UninitializedRelationError> {
        Ok(self
            .domain(domain)
            .email_ids()?
            .iter()
            .map(|id| self.email(*id))
            .collect())
    }

    pub fn owner_of(&self, email: EmailId) -> Result<&Person, UninitializedRelationError> {
        Ok(self.person(self.email(email).owner_id()?))
    }

    pub fn domain_of(&self, email: EmailId) -> Result<&Domain, UninitializedRelationError> {
        Ok(self.domain(self.email(email).domain_id()?))
    }

    pub fn email_of(&self, person: PersonId) -> Result<&Email, UninitializedRelationError> {
        Ok(self.email(self.person(person).email_id()?))
    }

    pub fn stats_of(&self, domain: DomainId) -> Result<&DomainStats, UninitializedRelationError> {
        Ok(self.stats(self.domain(domain).stats_id()?))
    }

    pub fn domain_of_stats(&self, stats: StatsId) -> Result<&Domain, UninitializedRelationError> {
        Ok(self.domain(self.stats(stats).domain_id()?))
    }
}

/// A mapped response: the arena plus the entity the endpoint is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapped<Id> {
    graph: ModelGraph,
    root: Id,
}

impl<Id: Copy> Mapped<Id> {
    pub(crate) fn new(graph: ModelGraph, root: Id) -> Self {
        Self { graph, root }
    }

    pub fn graph(&self) -> &ModelGraph {
        &self.graph
    }

    /// Id of the entity the endpoint is about, valid in [`Mapped::graph`].
    pub fn root(&self) -> Id {
        self.root
    }

    pub fn into_parts(self) -> (ModelGraph, Id) {
        (self.graph, self.root)
    }
}

impl Mapped<DomainId> {
    pub fn domain(&self) -> &Domain {
        self.graph.domain(self.root)
    }
}

impl Mapped<EmailId> {
    pub fn email(&self) -> &Email {
        self.graph.email(self.root)
    }
}

impl Mapped<StatsId> {
    pub fn stats(&self) -> &DomainStats {
        self.graph.stats(self.root)
    }

    /// `"<domain>: total_emails_count: <n>"`.
    pub fn summary(&self) -> Result<String, UninitializedRelationError> {
        let domain = self.graph.domain_of_stats(self.root)?;
        Ok(format!(
            "{}: total_emails_count: {}",
            domain,
            self.stats().total_emails_count
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmailStatus;

    #[test]
    fn adding_the_same_address_twice_keeps_one_entry() {
        let mut graph = ModelGraph::new();
        let domain = graph.insert_domain(Domain::new("example.com"));
        graph.init_emails(domain);

        let first = graph.insert_email(Email::new("info@example.com", EmailStatus::Valid));
        let second = graph.insert_email(Email::new("info@example.com", EmailStatus::Unknown));

        assert_eq!(graph.add_email(domain, first), Ok(true));
        assert_eq!(graph.add_email(domain, second), Ok(false));
        assert_eq!(graph.add_email(domain, first), Ok(false));

        let emails = graph.emails_of(domain).unwrap();
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].status, EmailStatus::Valid);
        assert_eq!(graph.domain_of(first).unwrap().name, "example.com");
        assert!(graph.domain_of(second).is_err());
    }

    #[test]
    fn add_email_needs_initialized_list() {
        let mut graph = ModelGraph::new();
        let domain = graph.insert_domain(Domain::new("example.com"));
        let email = graph.insert_email(Email::new("a@example.com", EmailStatus::Valid));

        let err = graph.add_email(domain, email).unwrap_err();
        assert_eq!(err.relation, "Domain.emails");
    }

    #[test]
    fn init_emails_keeps_existing_entries() {
        let mut graph = ModelGraph::new();
        let domain = graph.insert_domain(Domain::new("example.com"));
        graph.init_emails(domain);
        let email = graph.insert_email(Email::new("a@example.com", EmailStatus::Valid));
        graph.add_email(domain, email).unwrap();

        graph.init_emails(domain);
        assert_eq!(graph.emails_of(domain).unwrap().len(), 1);
    }

    #[test]
    fn owner_and_stats_links_are_bidirectional() {
        let mut graph = ModelGraph::new();
        let email = graph.insert_email(Email::new("john@example.com", EmailStatus::Valid));
        let person = graph.insert_person(Person::new("John", "Doe"));
        graph.link_owner(email, person);

        assert_eq!(graph.owner_of(email).unwrap().to_string(), "John Doe");
        assert_eq!(graph.email_of(person).unwrap().address, "john@example.com");

        let domain = graph.insert_domain(Domain::new("example.com"));
        let stats = graph.insert_stats(DomainStats::new(81));
        graph.link_stats(domain, stats);

        assert_eq!(graph.stats_of(domain).unwrap().total_emails_count, 81);
        assert_eq!(graph.domain_of_stats(stats).unwrap().name, "example.com");

        let mapped = Mapped::new(graph, stats);
        assert_eq!(
            mapped.summary().unwrap(),
            "example.com: total_emails_count: 81"
        );

        let (graph, root) = mapped.into_parts();
        assert_eq!(root, stats);
        assert_eq!(graph.domain_of_stats(root).unwrap().name, "example.com");
    }
}
