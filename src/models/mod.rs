//! In-memory domain model built from API responses.
//!
//! Relation fields are late-initialized: a relation the response said
//! nothing about stays unset, and reading it yields
//! [`UninitializedRelationError`] instead of an empty value.

mod entities;
mod graph;
mod lateinit;

pub use entities::{Domain, DomainStats, Email, EmailStatus, Person};
pub use graph::{DomainId, EmailId, Mapped, ModelGraph, PersonId, StatsId};
pub use lateinit::{LateInit, UninitializedRelationError};
