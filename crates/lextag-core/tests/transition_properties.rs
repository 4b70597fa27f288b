//! Integration tests over a realistic label alphabet.
//!
//! These exercise the full pipeline from label strings to the transition
//! set a constrained decoder would consume.

use std::collections::HashSet;

use lextag_core::{
    allowed_transitions, validate_sequence, LabelAlphabet, Role, TransitionError,
};

/// A small but representative slice of a trained tag vocabulary: role-only
/// labels, gap labels, and category-plus-supersense labels.
fn realistic_alphabet() -> LabelAlphabet {
    LabelAlphabet::new([
        "O",
        "o",
        "B",
        "b",
        "I_",
        "i_",
        "I~",
        "i~",
        "O-N-n.person",
        "O-V-v.cognition",
        "O-P-p.locus",
        "o-N-n.attribute",
        "B-V-v.social",
        "b-P",
        "I_-N-n.group",
        "i_-V",
        "I~-P-p.time",
        "i~-ADV",
    ])
}

#[test]
fn test_start_row() {
    let alphabet = realistic_alphabet();
    let set = allowed_transitions(&alphabet).unwrap();
    let start = set.start_index();

    for (index, label) in alphabet.iter().enumerate() {
        let role = lextag_core::decompose(label).role;
        let expected = matches!(role, "O" | "B");
        assert_eq!(set.contains(start, index), expected, "START -> {label}");
    }
    assert!(!set.contains(start, set.end_index()));
}

#[test]
fn test_end_column() {
    let alphabet = realistic_alphabet();
    let set = allowed_transitions(&alphabet).unwrap();
    let end = set.end_index();

    for (index, label) in alphabet.iter().enumerate() {
        let role = lextag_core::decompose(label).role;
        let expected = matches!(role, "O" | "I_" | "I~");
        assert_eq!(set.contains(index, end), expected, "{label} -> END");
    }
}

#[test]
fn test_synthetic_markers_never_predicted() {
    let alphabet = realistic_alphabet();
    let set = allowed_transitions(&alphabet).unwrap();
    for (from, to) in set.iter() {
        assert_ne!(to, set.start_index(), "pair into START");
        assert_ne!(from, set.end_index(), "pair out of END");
    }
}

/// Every label must be reachable from START and able to reach END through
/// some legal sequence; the role grammar guarantees it, the built set must
/// preserve it.
#[test]
fn test_all_labels_reachable_and_coreachable() {
    let alphabet = realistic_alphabet();
    let set = allowed_transitions(&alphabet).unwrap();

    let mut forward: HashSet<usize> = HashSet::from([set.start_index()]);
    let mut frontier = vec![set.start_index()];
    while let Some(from) = frontier.pop() {
        for (f, t) in set.iter() {
            if f == from && forward.insert(t) {
                frontier.push(t);
            }
        }
    }

    let mut backward: HashSet<usize> = HashSet::from([set.end_index()]);
    let mut frontier = vec![set.end_index()];
    while let Some(to) = frontier.pop() {
        for (f, t) in set.iter() {
            if t == to && backward.insert(f) {
                frontier.push(f);
            }
        }
    }

    for (index, label) in alphabet.iter().enumerate() {
        assert!(forward.contains(&index), "{label} unreachable from START");
        assert!(backward.contains(&index), "{label} cannot reach END");
    }
}

#[test]
fn test_pair_count_is_role_driven() {
    // Two alphabets with the same role multiset produce transition sets of
    // the same size regardless of categories and supersenses.
    let plain = LabelAlphabet::new(["O", "B", "I_"]);
    let decorated = LabelAlphabet::new(["O-N-n.person", "B-V-v.social", "I_-V-v.social"]);
    let a = allowed_transitions(&plain).unwrap();
    let b = allowed_transitions(&decorated).unwrap();
    assert_eq!(a.len(), b.len());
}

#[test]
fn test_candidate_sequence_rejected_at_exact_step() {
    use Role::*;
    // O B o i_ I_ breaks at the fourth transition: a gap outside token
    // cannot open a gap continuation.
    let result = validate_sequence([Out, Begin, GapOut, GapInStrong, InStrong]);
    assert_eq!(
        result,
        Err(TransitionError::Disallowed {
            step: 4,
            from: GapOut,
            to: GapInStrong,
        })
    );
}

#[test]
fn test_candidate_sequence_accepted() {
    use Role::*;
    // A gappy strong expression with a weak expression inside the gap.
    validate_sequence([Out, Begin, GapBegin, GapInWeak, InStrong, Out]).unwrap();
}
