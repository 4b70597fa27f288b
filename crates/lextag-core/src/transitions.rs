//! Legal label-to-label transitions over an augmented alphabet.

use std::str::FromStr;

use tracing::debug;

use crate::alphabet::LabelAlphabet;
use crate::error::{RoleSide, TransitionError};
use crate::label::decompose;
use crate::role::Role;

/// The set of legal `(from, to)` label-index pairs over an alphabet plus its
/// `START`/`END` markers.
///
/// Pairs are generated in sorted order, so membership is a binary search.
/// The set never contains a pair into `start_index()` or out of
/// `end_index()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionSet {
    pairs: Vec<(usize, usize)>,
    num_labels: usize,
}

impl TransitionSet {
    /// All legal pairs, sorted by `(from, to)`.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Whether `from -> to` is legal.
    pub fn contains(&self, from: usize, to: usize) -> bool {
        self.pairs.binary_search(&(from, to)).is_ok()
    }

    /// Number of legal pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Size of the base alphabet, excluding the synthetic markers.
    pub fn num_labels(&self) -> usize {
        self.num_labels
    }

    /// Index of the synthetic `START` marker.
    pub fn start_index(&self) -> usize {
        self.num_labels
    }

    /// Index of the synthetic `END` marker.
    pub fn end_index(&self) -> usize {
        self.num_labels + 1
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs.iter().copied()
    }
}

fn parse_role(role: &str, side: RoleSide) -> Result<Role, TransitionError> {
    Role::from_str(role).map_err(|_| TransitionError::InvalidRole {
        role: role.to_string(),
        side,
    })
}

/// Build the full transition set for `alphabet` plus its boundary markers.
///
/// Every ordered pair of augmented labels is checked once against the role
/// grammar. A label whose role falls outside the closed scheme aborts
/// construction with the side it appeared on, so a partially built set is
/// never returned.
pub fn allowed_transitions(alphabet: &LabelAlphabet) -> Result<TransitionSet, TransitionError> {
    let augmented = alphabet.labels_with_boundaries();
    let mut pairs = Vec::new();
    for &(from_index, from_label) in &augmented {
        let from = parse_role(decompose(from_label).role, RoleSide::From)?;
        for &(to_index, to_label) in &augmented {
            let to = parse_role(decompose(to_label).role, RoleSide::To)?;
            if from.may_precede(to) {
                pairs.push((from_index, to_index));
            }
        }
    }
    debug!(
        labels = alphabet.len(),
        pairs = pairs.len(),
        "built transition set"
    );
    Ok(TransitionSet {
        pairs,
        num_labels: alphabet.len(),
    })
}
