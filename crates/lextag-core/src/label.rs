//! Lextag decomposition.
//!
//! A lextag is either a bare role (`O`) or `<role>-<lexcat>-<supersense>`
//! (`B-V-v.motion`). Only the first two dash-separated components carry
//! meaning here; the supersense tail stays on the label string untouched.

/// Synthetic label that opens every sequence.
pub const START: &str = "START";

/// Synthetic label that closes every sequence.
pub const END: &str = "END";

/// The two leading components of a lextag, borrowed from the label string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelParts<'a> {
    /// Boundary-role component.
    pub role: &'a str,
    /// Lexical-category component, absent on role-only labels.
    pub lexcat: Option<&'a str>,
}

/// Split a label into its role and lexical-category components.
///
/// `START` and `END` contain no dash and so decompose to themselves with no
/// category. Anything past the second dash (the supersense, which may itself
/// contain dashes) is ignored.
///
/// ```
/// use lextag_core::decompose;
///
/// assert_eq!(decompose("O").role, "O");
/// assert_eq!(decompose("O").lexcat, None);
/// assert_eq!(decompose("I~-V-v.cognition").role, "I~");
/// assert_eq!(decompose("I~-V-v.cognition").lexcat, Some("V"));
/// ```
pub fn decompose(label: &str) -> LabelParts<'_> {
    let mut parts = label.splitn(3, '-');
    LabelParts {
        role: parts.next().unwrap_or_default(),
        lexcat: parts.next(),
    }
}
