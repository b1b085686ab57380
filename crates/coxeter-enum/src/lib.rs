//! # coxeter-enum
//!
//! Todd–Coxeter coset enumeration for the Coxeter group-theory library.
//!
//! Given a finite presentation of a group `G` and words generating a
//! subgroup `H`, the enumerator builds the coset table of `H` in `G`: how
//! every generator permutes the right cosets `G/H`. The group itself is
//! never materialised.
//!
//! ## Design
//!
//! - **Arena of classes**: cosets are dense `u32` ids with fixed-width
//!   rows of edge targets, so the cyclic class graph holds no references
//! - **Scan lines**: every relator is tracked at every coset (and every
//!   subgroup generator at the base coset) with two converging cursors
//! - **Eager coincidences**: merges keep the lower id and renumber the
//!   table contiguously before any further scanning
//! - **Deterministic**: definitions always fill the first undefined edge,
//!   so the same presentation always yields the same numbering

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coincidence;
pub mod coset;
pub mod enumerator;
pub mod error;
pub mod scan;
pub mod table;

#[cfg(test)]
mod proptests;

pub use coset::CosetId;
pub use enumerator::{
    enumerate, EnumerationConfig, EnumerationStats, Enumerator, Propagation, State, Step,
};
pub use error::EnumerationError;
pub use scan::{ScanLine, ScanOutcome};
pub use table::CosetTable;
