//! Batch masks over (sequence, token, label).

use lextag_core::Upos;

use crate::error::MaskError;
use crate::index::UposMaskIndex;

/// Replacement value for disallowed logits, low enough that an arg-max or
/// Viterbi decode never selects a masked entry.
pub const MASKED_LOGIT: f32 = -1e32;

/// Boolean mask of shape `(batch, max_len, num_labels)`.
///
/// Built fresh for every batch and discarded after the decoder consumes it.
/// Rows beyond a sequence's true length stay fully disallowed; the decoder
/// applies its own padding mask, so those positions carry no contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchMask {
    batch: usize,
    max_len: usize,
    num_labels: usize,
    data: Vec<bool>,
}

impl BatchMask {
    /// Assemble the mask for one batch of sequences.
    ///
    /// Each token position receives the precomputed admissibility row for
    /// its UPOS; the work per token is one row copy. `batch_lemmas` must be
    /// shaped like `batch_upos`: lemmas are accepted so lemma-conditioned
    /// category pairings can be added without an interface change, but no
    /// current rule consults them.
    ///
    /// # Errors
    ///
    /// Returns an error if a UPOS string falls outside the closed 17-tag
    /// vocabulary, or if the lemma batch is not shaped like the UPOS batch.
    pub fn build(
        index: &UposMaskIndex,
        batch_upos: &[Vec<String>],
        batch_lemmas: &[Vec<String>],
    ) -> Result<Self, MaskError> {
        if batch_lemmas.len() != batch_upos.len() {
            return Err(MaskError::BatchShapeMismatch {
                upos: batch_upos.len(),
                lemmas: batch_lemmas.len(),
            });
        }
        let num_labels = index.num_labels();
        let max_len = batch_upos.iter().map(Vec::len).max().unwrap_or(0);
        let mut data = vec![false; batch_upos.len() * max_len * num_labels];

        for (seq, (upos_tags, lemmas)) in batch_upos.iter().zip(batch_lemmas).enumerate() {
            if lemmas.len() != upos_tags.len() {
                return Err(MaskError::LemmaShapeMismatch {
                    seq,
                    upos: upos_tags.len(),
                    lemmas: lemmas.len(),
                });
            }
            for (token, tag) in upos_tags.iter().enumerate() {
                let upos: Upos = tag.parse().map_err(|_| MaskError::UnknownUpos {
                    tag: tag.clone(),
                    seq,
                    token,
                })?;
                let start = (seq * max_len + token) * num_labels;
                data[start..start + num_labels].copy_from_slice(index.row(upos));
            }
        }

        Ok(Self {
            batch: batch_upos.len(),
            max_len,
            num_labels,
            data,
        })
    }

    /// `(batch, max_len, num_labels)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.batch, self.max_len, self.num_labels)
    }

    /// Whether `label` is permitted at `(seq, token)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range.
    pub fn is_allowed(&self, seq: usize, token: usize, label: usize) -> bool {
        assert!(
            seq < self.batch && token < self.max_len && label < self.num_labels,
            "position ({seq}, {token}, {label}) out of range for shape {:?}",
            self.shape()
        );
        self.data[(seq * self.max_len + token) * self.num_labels + label]
    }

    /// Full mask row at `(seq, token)`, indexed by label.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range.
    pub fn row(&self, seq: usize, token: usize) -> &[bool] {
        assert!(
            seq < self.batch && token < self.max_len,
            "position ({seq}, {token}) out of range for shape {:?}",
            self.shape()
        );
        let start = (seq * self.max_len + token) * self.num_labels;
        &self.data[start..start + self.num_labels]
    }

    /// Replace disallowed entries of a flat `(batch, max_len, num_labels)`
    /// logit tensor with [`MASKED_LOGIT`], leaving allowed entries untouched.
    ///
    /// # Panics
    ///
    /// Panics if `logits.len()` does not match the mask size.
    pub fn apply_to_logits(&self, logits: &mut [f32]) {
        assert_eq!(
            logits.len(),
            self.data.len(),
            "logits length {} != mask size {}",
            logits.len(),
            self.data.len()
        );
        for (logit, &allowed) in logits.iter_mut().zip(&self.data) {
            if !allowed {
                *logit = MASKED_LOGIT;
            }
        }
    }
}
