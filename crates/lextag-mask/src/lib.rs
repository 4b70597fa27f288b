//! Per-token label masking for constrained lextag decoding.
//!
//! The transition tables in `lextag-core` constrain which label may follow
//! which; this crate constrains which labels are available at each token in
//! the first place, based on the token's UPOS tag. The two constraints are
//! handed to the same downstream decoder: the transition set prunes its
//! search, the batch mask drives per-token logits for incompatible labels to
//! a large negative value before decoding.
//!
//! Construction is two-phase. [`UposMaskIndex`] precomputes, once per model,
//! one admissibility row per UPOS over the label alphabet. [`BatchMask`] is
//! then assembled fresh per batch with one row copy per token.
//!
//! # Example
//!
//! ```
//! use lextag_core::{CompatTable, LabelAlphabet};
//! use lextag_mask::{BatchMask, UposMaskIndex};
//!
//! let alphabet = LabelAlphabet::new(["O", "O-N-n.person", "O-V-v.cognition", "B"]);
//! let index = UposMaskIndex::new(&alphabet, &CompatTable::new());
//!
//! let upos = vec![vec!["NOUN".to_string()]];
//! let lemmas = vec![vec!["dog".to_string()]];
//! let mask = BatchMask::build(&index, &upos, &lemmas).unwrap();
//!
//! assert!(mask.is_allowed(0, 0, 0)); // O: role-only
//! assert!(mask.is_allowed(0, 0, 1)); // O-N-n.person: N fits NOUN
//! assert!(!mask.is_allowed(0, 0, 2)); // O-V-v.cognition: V does not
//! assert!(mask.is_allowed(0, 0, 3)); // B: not an outside label
//! ```

pub mod batch;
pub mod error;
pub mod index;

pub use batch::{BatchMask, MASKED_LOGIT};
pub use error::MaskError;
pub use index::UposMaskIndex;
