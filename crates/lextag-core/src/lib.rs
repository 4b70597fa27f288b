//! Constraint tables for lexical-semantic sequence tagging.
//!
//! A lextag sequence labeler assigns one composite tag per token, encoding a
//! chunking boundary role plus a lexical category. This crate holds the
//! rules that decide which tag sequences are structurally possible at all,
//! independent of any model score:
//!
//! - **Role grammar** — which boundary role may follow which
//!   ([`Role::may_precede`]), expanded over a label alphabet into the full
//!   set of legal `(from, to)` index pairs ([`allowed_transitions`]) that a
//!   constrained decoder consumes.
//! - **Category compatibility** — which lexical categories a token's UPOS
//!   tag admits ([`lexcat_allowed`], [`CompatTable`]).
//! - **Sequence validation** — incremental checking of candidate role
//!   sequences with exact failure locations ([`SequenceValidator`]).
//!
//! Everything here is a deterministic rule table: built once from the closed
//! vocabularies, immutable afterward, and shareable across threads without
//! synchronization.
//!
//! # Example
//!
//! ```
//! use lextag_core::{allowed_transitions, LabelAlphabet, Role, SequenceValidator};
//!
//! let alphabet = LabelAlphabet::new(["O", "B", "I_-N-n.group", "O-V-v.social"]);
//! let transitions = allowed_transitions(&alphabet).unwrap();
//! assert!(transitions.contains(transitions.start_index(), 0)); // START -> O
//! assert!(!transitions.contains(1, transitions.end_index())); // B may not end
//!
//! let mut validator = SequenceValidator::new();
//! validator.push(Role::Out).unwrap();
//! validator.push(Role::Begin).unwrap();
//! assert_eq!(validator.valid_next_roles().len(), 4); // o, b, I_, I~
//! validator.push(Role::InStrong).unwrap();
//! validator.finish().unwrap();
//! ```

pub mod alphabet;
pub mod compat;
pub mod error;
pub mod label;
pub mod role;
pub mod transitions;
pub mod validator;
pub mod vocab;

pub use alphabet::LabelAlphabet;
pub use compat::{lexcat_allowed, CompatTable};
pub use error::{RoleSide, TransitionError, UnknownLexcat, UnknownRole, UnknownUpos};
pub use label::{decompose, LabelParts, END, START};
pub use role::Role;
pub use transitions::{allowed_transitions, TransitionSet};
pub use validator::{validate_sequence, SequenceValidator};
pub use vocab::{Lexcat, Upos};
