//! # Coxeter
//!
//! Coset enumeration for finitely presented groups.
//!
//! Coxeter runs the Todd–Coxeter algorithm on a presentation
//! `⟨ generators | relators ⟩` and a subgroup given by generating words,
//! producing the action of the group on the cosets of the subgroup.
//!
//! ## Features
//!
//! - **Presentations**: letter-string words, validated before enumeration
//! - **Coset enumeration**: deterministic, with coset/step/time limits
//! - **Word problem**: membership tests against a closed coset table
//! - **Permutation groups**: representations, orders and membership
//!
//! ## Quick Start
//!
//! ```rust
//! use coxeter::prelude::*;
//!
//! // Dihedral group of order 10, trivial subgroup.
//! let d5 = Presentation::parse(&["aa", "bb", "ababababab"], &["1"]).unwrap();
//! let table = enumerate(&d5, EnumerationConfig::default()).unwrap();
//! assert_eq!(table.len(), 10);
//! assert!(table.contains(&Word::from_letters("ab").unwrap().power(5)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use coxeter_enum as cosets;
pub use coxeter_perm as perm;
pub use coxeter_words as words;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use coxeter_enum::{enumerate, CosetId, CosetTable, EnumerationConfig, Enumerator};
    pub use coxeter_perm::{group_order, order_of_relators, PermGroup, Permutation, PermutationRepresentation};
    pub use coxeter_words::{Letter, Presentation, Word};
}
