//! Per-UPOS admissibility rows over a label alphabet.

use lextag_core::{decompose, CompatTable, LabelAlphabet, Lexcat, Upos};
use tracing::debug;

/// One admissibility row per UPOS, each covering the full label alphabet.
///
/// A label is admissible for a UPOS when it carries no lexical category,
/// when its role is anything other than an outside role (`O`/`o`), or when
/// its category is in the UPOS's allowed set. Rows are computed once at
/// construction, so assembling a batch mask is a single row copy per token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UposMaskIndex {
    num_labels: usize,
    // Upos-major.
    rows: Vec<bool>,
}

impl UposMaskIndex {
    pub fn new(alphabet: &LabelAlphabet, table: &CompatTable) -> Self {
        let num_labels = alphabet.len();
        let mut rows = vec![false; Upos::COUNT * num_labels];
        for upos in Upos::ALL {
            let row = &mut rows[upos.index() * num_labels..(upos.index() + 1) * num_labels];
            for (i, label) in alphabet.iter().enumerate() {
                row[i] = label_admissible(upos, table, label);
            }
        }
        debug!(labels = num_labels, "built per-UPOS admissibility rows");
        Self { num_labels, rows }
    }

    /// Size of the underlying label alphabet.
    pub fn num_labels(&self) -> usize {
        self.num_labels
    }

    /// Admissibility row for `upos`, indexed by label.
    pub fn row(&self, upos: Upos) -> &[bool] {
        &self.rows[upos.index() * self.num_labels..(upos.index() + 1) * self.num_labels]
    }
}

/// Admissibility of one label under one UPOS.
fn label_admissible(upos: Upos, table: &CompatTable, label: &str) -> bool {
    let parts = decompose(label);
    let Some(lexcat) = parts.lexcat else {
        // Role-only labels are admissible under every UPOS.
        return true;
    };
    if parts.role != "O" && parts.role != "o" {
        // Only outside labels are subject to the category check.
        return true;
    }
    // A category string outside the closed vocabulary is in nobody's
    // allowed set.
    lexcat
        .parse::<Lexcat>()
        .map(|lexcat| table.allows(upos, lexcat))
        .unwrap_or(false)
}
