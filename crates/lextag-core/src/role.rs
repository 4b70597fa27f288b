//! Boundary roles of the eight-symbol chunking scheme.
//!
//! Every lextag starts with one of eight role symbols. Uppercase roles mark
//! tokens at the top level of the sentence; lowercase roles mark tokens
//! inside the gap of a discontinuous strong expression. The `_` and `~`
//! suffixes distinguish strong from weak continuations.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownRole;

/// Boundary role carried by the first component of a lextag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// `O`: outside any expression.
    Out,
    /// `B`: first token of a strong expression.
    Begin,
    /// `I_`: strong continuation.
    InStrong,
    /// `I~`: weak continuation.
    InWeak,
    /// `o`: outside token within a gap.
    GapOut,
    /// `b`: first token of an expression within a gap.
    GapBegin,
    /// `i_`: strong continuation within a gap.
    GapInStrong,
    /// `i~`: weak continuation within a gap.
    GapInWeak,
    /// Synthetic sequence-initial marker; participates in transitions but is
    /// never predicted.
    Start,
    /// Synthetic sequence-final marker; never predicted.
    End,
}

impl Role {
    /// The eight roles a tagger may actually emit, in canonical order.
    pub const PREDICTABLE: [Role; 8] = [
        Role::Out,
        Role::Begin,
        Role::InStrong,
        Role::InWeak,
        Role::GapOut,
        Role::GapBegin,
        Role::GapInStrong,
        Role::GapInWeak,
    ];

    /// Canonical spelling of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Out => "O",
            Role::Begin => "B",
            Role::InStrong => "I_",
            Role::InWeak => "I~",
            Role::GapOut => "o",
            Role::GapBegin => "b",
            Role::GapInStrong => "i_",
            Role::GapInWeak => "i~",
            Role::Start => "START",
            Role::End => "END",
        }
    }

    /// Whether `next` may immediately follow `self` in a tag sequence.
    ///
    /// The grammar:
    /// - nothing transitions into `START`, nothing leaves `END`;
    /// - a sequence opens with `O` or `B` and closes from `O`, `I_` or `I~`;
    /// - `B` and `o` may open gap material (`o`, `b`) or continue strongly
    ///   (`I_`, `I~`);
    /// - `b` must be followed by a gap continuation (`i_` or `i~`);
    /// - `O` stays outside or opens a fresh expression;
    /// - `I_`/`I~` may go anywhere except straight into a gap continuation;
    /// - `i_`/`i~` may go anywhere except back to `O` or `B`.
    ///
    /// The continuation variant is not required to match its opener: `b`
    /// followed by either `i_` or `i~` is accepted.
    pub fn may_precede(self, next: Role) -> bool {
        use Role::*;
        if next == Start || self == End {
            return false;
        }
        if self == Start {
            return matches!(next, Out | Begin);
        }
        if next == End {
            return matches!(self, Out | InStrong | InWeak);
        }
        // Both sides are now predictable roles.
        (matches!(self, Begin | GapOut) && matches!(next, GapOut | GapBegin | InStrong | InWeak))
            || (self == GapBegin && matches!(next, GapInStrong | GapInWeak))
            || (self == Out && matches!(next, Out | Begin))
            || (matches!(self, InStrong | InWeak) && !matches!(next, GapInStrong | GapInWeak))
            || (matches!(self, GapInStrong | GapInWeak) && !matches!(next, Out | Begin))
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "O" => Ok(Role::Out),
            "B" => Ok(Role::Begin),
            "I_" => Ok(Role::InStrong),
            "I~" => Ok(Role::InWeak),
            "o" => Ok(Role::GapOut),
            "b" => Ok(Role::GapBegin),
            "i_" => Ok(Role::GapInStrong),
            "i~" => Ok(Role::GapInWeak),
            "START" => Ok(Role::Start),
            "END" => Ok(Role::End),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
