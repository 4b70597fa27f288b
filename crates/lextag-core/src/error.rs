//! Error types for constraint-table construction and sequence validation.

use std::fmt;

use thiserror::Error;

use crate::role::Role;

/// A role string outside the closed eight-symbol-plus-boundary scheme.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown boundary role `{0}`")]
pub struct UnknownRole(pub String);

/// A UPOS string outside the fixed 17-tag vocabulary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown UPOS tag `{0}`")]
pub struct UnknownUpos(pub String);

/// A lexical-category string outside the fixed 21-tag vocabulary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown lexical category `{0}`")]
pub struct UnknownLexcat(pub String);

/// Which side of a transition an offending role appeared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleSide {
    From,
    To,
}

impl fmt::Display for RoleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoleSide::From => "from",
            RoleSide::To => "to",
        })
    }
}

/// Errors raised while building a transition set or checking a sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// A label decomposed to a role outside the closed scheme. Construction
    /// aborts, so no partially built transition set is ever returned.
    #[error("invalid {side} role `{role}`")]
    InvalidRole { role: String, side: RoleSide },

    /// A candidate sequence contains an illegal adjacent pair. `step` is the
    /// 1-based index of the offending transition, counting the opening
    /// transition out of the sequence-initial state as step 1.
    #[error("role {to} may not follow {from} at step {step}")]
    Disallowed { step: usize, from: Role, to: Role },
}
