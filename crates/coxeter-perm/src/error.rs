//! Permutation errors.

use coxeter_enum::EnumerationError;
use coxeter_words::{Letter, MalformedPresentation};
use thiserror::Error;

/// Errors from building or combining permutations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PermError {
    #[error("image list is not a permutation of 0..{degree}")]
    NotAPermutation { degree: usize },

    #[error("degree mismatch: expected {expected}, found {found}")]
    DegreeMismatch { expected: usize, found: usize },

    #[error("coset table is not closed")]
    NotClosed,

    #[error("letter {0} is not in the alphabet")]
    UnknownLetter(Letter),

    #[error(transparent)]
    Presentation(#[from] MalformedPresentation),

    #[error(transparent)]
    Enumeration(#[from] EnumerationError),
}
