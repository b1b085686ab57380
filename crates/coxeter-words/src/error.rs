//! Presentation validation errors.

use thiserror::Error;

use crate::letter::Letter;

/// A presentation that cannot be enumerated.
///
/// Raised while building a `Presentation`; no enumeration state exists
/// when one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MalformedPresentation {
    #[error("invalid letter {0:?}")]
    InvalidLetter(char),

    #[error("empty word in presentation")]
    EmptyWord,

    #[error("identity letter inside word \"{0}\"")]
    MisplacedIdentity(String),

    #[error("letter {0} is not a generator of the presentation")]
    UnknownGenerator(Letter),

    #[error("generator {0} listed more than once")]
    DuplicateGenerator(Letter),

    #[error("generator list may only contain generators, found {0}")]
    NotAGenerator(Letter),

    #[error("presentation has no generators")]
    NoGenerators,
}
