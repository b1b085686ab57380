//! # coxeter-perm
//!
//! Permutation groups from closed coset tables.
//!
//! This crate provides:
//! - `Permutation`: permutations of `0..n` acting on the right
//! - `PermutationRepresentation`: the action of each generator on `G/H`
//! - `PermGroup`: stabilizer chains for group order and membership
//!
//! ## Usage
//!
//! ```
//! use coxeter_enum::EnumerationConfig;
//! use coxeter_perm::group_order;
//! use coxeter_words::Presentation;
//!
//! // The (2, 3, 4) triangle group is the symmetric group S4.
//! let p = Presentation::parse(&["aa", "bbb", "abababab"], &["1"]).unwrap();
//! let order = group_order(&p, EnumerationConfig::default()).unwrap();
//! assert_eq!(order, dashu::integer::UBig::from(24u32));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod group;
pub mod permutation;
pub mod representation;

#[cfg(test)]
mod proptests;

pub use error::PermError;
pub use group::PermGroup;
pub use permutation::Permutation;
pub use representation::{group_order, order_of_relators, PermutationRepresentation};
