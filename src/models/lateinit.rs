//! Relations whose "not fetched yet" state differs from "known to be empty".

use thiserror::Error;

/// A model relation was read before the mapper populated it.
///
/// This is a usage error: the model was built from a response that carries
/// no data for the relation (e.g. `Email::owner` on a verifier result).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("relation `{relation}` was read before it was initialized")]
pub struct UninitializedRelationError {
    pub relation: &'static str,
}

/// A late-initialized slot.
///
/// Reading an unset slot fails instead of producing a default, so a caller
/// cannot mistake "unknown" for "none".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LateInit<T> {
    relation: &'static str,
    value: Option<T>,
}

impl<T> LateInit<T> {
    /// Create an unset slot. `relation` names it in errors, e.g. `"Email.owner"`.
    pub const fn new(relation: &'static str) -> Self {
        Self {
            relation,
            value: None,
        }
    }

    pub fn get(&self) -> Result<&T, UninitializedRelationError> {
        self.value.as_ref().ok_or(UninitializedRelationError {
            relation: self.relation,
        })
    }

    pub fn get_mut(&mut self) -> Result<&mut T, UninitializedRelationError> {
        let relation = self.relation;
        self.value
            .as_mut()
            .ok_or(UninitializedRelationError { relation })
    }

    /// Populate (or overwrite) the slot.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    pub fn is_initialized(&self) -> bool {
        self.value.is_some()
    }

    pub fn relation(&self) -> &'static str {
        self.relation
    }
}
