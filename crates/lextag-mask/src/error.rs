//! Error types for batch mask assembly.

use thiserror::Error;

/// Errors raised while assembling a batch mask.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// A token carried a UPOS string outside the fixed 17-tag vocabulary.
    #[error("unknown UPOS tag `{tag}` at sequence {seq}, token {token}")]
    UnknownUpos {
        tag: String,
        seq: usize,
        token: usize,
    },

    /// The lemma batch does not have one sequence per UPOS sequence.
    #[error("batch has {upos} UPOS sequences but {lemmas} lemma sequences")]
    BatchShapeMismatch { upos: usize, lemmas: usize },

    /// A sequence's lemmas do not line up with its UPOS tags.
    #[error("sequence {seq} has {upos} UPOS tags but {lemmas} lemmas")]
    LemmaShapeMismatch {
        seq: usize,
        upos: usize,
        lemmas: usize,
    },
}
