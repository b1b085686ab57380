//! # coxeter-words
//!
//! Letters, words and validated presentations for the Coxeter coset
//! enumerator.
//!
//! This crate provides:
//! - Signed generator letters with formal inverses (`a`, `A = a⁻¹`)
//! - Words with free and cyclic reduction
//! - An ordered alphabet mapping letters to table columns
//! - `Presentation`: relators and subgroup generators, validated up front
//!
//! ## Conventions
//!
//! - Lower case letters are generators, upper case their inverses
//! - `'1'` is the reserved identity letter; on its own it denotes the
//!   trivial subgroup, and it may not appear inside longer words

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod alphabet;
pub mod error;
pub mod letter;
pub mod presentation;
pub mod word;

#[cfg(test)]
mod proptests;

pub use alphabet::Alphabet;
pub use error::MalformedPresentation;
pub use letter::Letter;
pub use presentation::{ColumnWord, Presentation};
pub use word::Word;
