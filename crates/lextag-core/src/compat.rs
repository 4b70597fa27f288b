//! UPOS to lexical-category compatibility.

use std::collections::BTreeMap;

use tracing::info;

use crate::vocab::{Lexcat, Upos};

/// Whether `lexcat` is an acceptable category for a token tagged `upos`.
///
/// Identical spellings are acceptable outright, as is a small fixed table of
/// pairings the annotation guidelines treat as matches. Everything else is a
/// mismatch.
pub fn lexcat_allowed(upos: Upos, lexcat: Lexcat) -> bool {
    // Sentinel categories marked `!@` are compatible with any UPOS; the
    // closed vocabulary currently contains no such spelling.
    if lexcat.as_str().ends_with("!@") {
        return true;
    }
    if upos.as_str() == lexcat.as_str() {
        return true;
    }
    if matches!(
        (upos, lexcat),
        (Upos::Noun, Lexcat::N)
            | (Upos::Propn, Lexcat::N)
            | (Upos::Verb, Lexcat::V)
            | (Upos::Adp, Lexcat::P)
            | (Upos::Adv, Lexcat::P)
            | (Upos::Sconj, Lexcat::P)
            | (Upos::Adp, Lexcat::Disc)
            | (Upos::Adv, Lexcat::Disc)
            | (Upos::Sconj, Lexcat::Disc)
            | (Upos::Part, Lexcat::Poss)
    ) {
        return true;
    }
    // Infinitive categories under a subordinating conjunction. INF under
    // PART is licensed only when the lemma is "to", and lemma-conditioned
    // pairings are not wired up, so that one stays off.
    if lexcat.as_str().starts_with("INF") && upos == Upos::Sconj {
        return true;
    }
    // AUX with V (lemma "be") and ADP with CCONJ (lemma "versus") stay off
    // for the same reason.
    if upos == Upos::Pron && matches!(lexcat, Lexcat::Pron | Lexcat::PronPoss) {
        return true;
    }
    if lexcat == Lexcat::Adv && matches!(upos, Upos::Adv | Upos::Part) {
        return true;
    }
    false
}

/// Precomputed [`lexcat_allowed`] over the full UPOS x lexcat product.
///
/// Built once at model-construction time, immutable afterward, and freely
/// shareable across threads. Every UPOS row is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatTable {
    // Upos-major, Lexcat-minor.
    allowed: Vec<bool>,
}

impl CompatTable {
    /// Build the table and log it in full for audit.
    pub fn new() -> Self {
        let mut allowed = vec![false; Upos::COUNT * Lexcat::COUNT];
        for upos in Upos::ALL {
            for lexcat in Lexcat::ALL {
                allowed[upos.index() * Lexcat::COUNT + lexcat.index()] =
                    lexcat_allowed(upos, lexcat);
            }
        }
        let table = Self { allowed };
        info!("allowed lexcats per UPOS:\n{}", table.dump());
        table
    }

    /// Whether `lexcat` is in the allowed set for `upos`.
    pub fn allows(&self, upos: Upos, lexcat: Lexcat) -> bool {
        self.allowed[upos.index() * Lexcat::COUNT + lexcat.index()]
    }

    /// Lexcats permitted for `upos`, in vocabulary order.
    pub fn allowed_lexcats(&self, upos: Upos) -> impl Iterator<Item = Lexcat> + '_ {
        Lexcat::ALL
            .into_iter()
            .filter(move |&lexcat| self.allows(upos, lexcat))
    }

    /// Human-readable JSON rendering of the full table, sorted both ways.
    pub fn dump(&self) -> String {
        let map: BTreeMap<&str, Vec<&str>> = Upos::ALL
            .into_iter()
            .map(|upos| {
                (
                    upos.as_str(),
                    self.allowed_lexcats(upos).map(Lexcat::as_str).collect(),
                )
            })
            .collect();
        serde_json::to_string_pretty(&map).expect("a map of strings always serializes")
    }
}

impl Default for CompatTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed_set(table: &CompatTable, upos: Upos) -> Vec<&'static str> {
        table.allowed_lexcats(upos).map(Lexcat::as_str).collect()
    }

    #[test]
    fn test_identical_spellings() {
        assert!(lexcat_allowed(Upos::Intj, Lexcat::Intj));
        assert!(lexcat_allowed(Upos::Punct, Lexcat::Punct));
        assert!(lexcat_allowed(Upos::X, Lexcat::X));
    }

    #[test]
    fn test_known_equivalences() {
        assert!(lexcat_allowed(Upos::Noun, Lexcat::N));
        assert!(lexcat_allowed(Upos::Propn, Lexcat::N));
        assert!(lexcat_allowed(Upos::Verb, Lexcat::V));
        assert!(lexcat_allowed(Upos::Part, Lexcat::Poss));
        assert!(!lexcat_allowed(Upos::Noun, Lexcat::V));
        assert!(!lexcat_allowed(Upos::Verb, Lexcat::N));
    }

    #[test]
    fn test_pron_exceptions() {
        assert!(lexcat_allowed(Upos::Pron, Lexcat::Pron));
        assert!(lexcat_allowed(Upos::Pron, Lexcat::PronPoss));
        assert!(!lexcat_allowed(Upos::Pron, Lexcat::N));
    }

    #[test]
    fn test_lemma_conditioned_pairings_stay_off() {
        assert!(!lexcat_allowed(Upos::Aux, Lexcat::V));
        assert!(!lexcat_allowed(Upos::Adp, Lexcat::Cconj));
        assert!(!lexcat_allowed(Upos::Part, Lexcat::Inf));
    }

    #[test]
    fn test_sconj_row() {
        let table = CompatTable::new();
        assert_eq!(
            allowed_set(&table, Upos::Sconj),
            vec!["DISC", "INF", "INF.P", "P", "SCONJ"]
        );
    }

    #[test]
    fn test_selected_rows() {
        let table = CompatTable::new();
        assert_eq!(allowed_set(&table, Upos::Adp), vec!["DISC", "P"]);
        assert_eq!(allowed_set(&table, Upos::Adv), vec!["ADV", "DISC", "P"]);
        assert_eq!(allowed_set(&table, Upos::Part), vec!["ADV", "POSS"]);
        assert_eq!(allowed_set(&table, Upos::Noun), vec!["N"]);
        assert_eq!(allowed_set(&table, Upos::Det), vec!["DET"]);
    }

    #[test]
    fn test_every_row_non_empty() {
        let table = CompatTable::new();
        for upos in Upos::ALL {
            assert!(
                table.allowed_lexcats(upos).next().is_some(),
                "{upos} has no allowed lexcats"
            );
        }
    }

    #[test]
    fn test_table_matches_predicate() {
        let table = CompatTable::new();
        for upos in Upos::ALL {
            for lexcat in Lexcat::ALL {
                assert_eq!(table.allows(upos, lexcat), lexcat_allowed(upos, lexcat));
            }
        }
    }

    #[test]
    fn test_dump_lists_every_upos() {
        let table = CompatTable::new();
        let dump = table.dump();
        for upos in Upos::ALL {
            assert!(dump.contains(&format!("\"{upos}\"")));
        }
    }
}
