//! Enumeration errors.

use std::time::Duration;

use thiserror::Error;

use crate::coset::CosetId;

/// Errors that can stop a coset enumeration.
///
/// Limits are resource bounds imposed by the caller; enumeration of a
/// subgroup of infinite index only ever ends with one of them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EnumerationError {
    #[error("coset limit of {limit} live cosets reached")]
    CosetLimit { limit: usize },

    #[error("step limit of {limit} driver steps reached")]
    StepLimit { limit: usize },

    #[error("time limit of {limit:?} exceeded")]
    TimeLimit { limit: Duration },

    /// Internal logic fault: an edge was redefined outside coincidence handling.
    #[error("edge {coset} --{column}--> already leads to {existing}, cannot redirect to {requested}")]
    EdgeConflict {
        coset: CosetId,
        column: usize,
        existing: CosetId,
        requested: CosetId,
    },
}
