use crate::records::HandId;

/// Why a hand was excluded from output.
///
/// Failures never abort a session. They are raised per line or per hand,
/// then collected by the joiner against the offending identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Failure {
    /// Malformed line: token count, numeric field, card or action code.
    #[error("structural: {0}")]
    Structural(String),
    /// A hand, player, or seat referenced by one file is missing from another.
    #[error("referential: {0}")]
    Referential(String),
    /// Context construction referenced a seat or field the hand lacks.
    #[error("lookup: {0}")]
    Lookup(String),
}

impl Failure {
    pub fn structural(reason: impl Into<String>) -> Self {
        Self::Structural(reason.into())
    }
    pub fn referential(reason: impl Into<String>) -> Self {
        Self::Referential(reason.into())
    }
    pub fn lookup(reason: impl Into<String>) -> Self {
        Self::Lookup(reason.into())
    }
}

/// A line that could not be merged, tagged with the hand it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{id}: {failure}")]
pub struct Rejection {
    pub id: HandId,
    pub failure: Failure,
}

impl Rejection {
    pub fn new(id: HandId, failure: Failure) -> Self {
        Self { id, failure }
    }
}
