//! The ordered generator alphabet.
//!
//! Columns are laid out as `[g1, g1⁻¹, g2, g2⁻¹, ...]`, so the inverse of
//! column `c` is always `c ^ 1`.

use rustc_hash::FxHashMap;

use crate::error::MalformedPresentation;
use crate::letter::Letter;

/// Deduplicated, ordered generators and their inverses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alphabet {
    /// Letter for each column.
    letters: Vec<Letter>,
    /// Reverse lookup: letter to column.
    columns: FxHashMap<Letter, usize>,
}

impl Alphabet {
    /// Creates an alphabet from generators in the given order.
    ///
    /// # Errors
    ///
    /// Fails on an empty list, a repeated generator, or an inverse or
    /// identity letter in the list.
    pub fn new(generators: &[Letter]) -> Result<Self, MalformedPresentation> {
        if generators.is_empty() {
            return Err(MalformedPresentation::NoGenerators);
        }

        let mut alphabet = Self::default();
        for &gen in generators {
            if gen.is_identity() || gen.is_inverse() {
                return Err(MalformedPresentation::NotAGenerator(gen));
            }
            if alphabet.columns.contains_key(&gen) {
                return Err(MalformedPresentation::DuplicateGenerator(gen));
            }
            alphabet.intern(gen);
            alphabet.intern(gen.invert());
        }
        Ok(alphabet)
    }

    /// Creates an alphabet from a string of generator characters, e.g. `"ab"`.
    ///
    /// # Errors
    ///
    /// See [`Alphabet::new`]; also fails on characters that are not letters.
    pub fn parse(generators: &str) -> Result<Self, MalformedPresentation> {
        let letters = generators
            .chars()
            .map(|c| Letter::from_char(c).ok_or(MalformedPresentation::InvalidLetter(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&letters)
    }

    /// Collects the generators used by some letters, ordered by index.
    ///
    /// # Errors
    ///
    /// Fails with `NoGenerators` if no letter other than the identity occurs.
    pub fn infer<'a>(letters: impl IntoIterator<Item = &'a Letter>) -> Result<Self, MalformedPresentation> {
        let mut gens: Vec<Letter> = letters
            .into_iter()
            .filter(|l| !l.is_identity())
            .map(|l| l.positive())
            .collect();
        gens.sort_unstable();
        gens.dedup();
        Self::new(&gens)
    }

    fn intern(&mut self, letter: Letter) -> usize {
        let column = self.letters.len();
        self.letters.push(letter);
        self.columns.insert(letter, column);
        column
    }

    /// Returns the column of a letter, if it belongs to this alphabet.
    #[must_use]
    pub fn column(&self, letter: Letter) -> Option<usize> {
        self.columns.get(&letter).copied()
    }

    /// Returns the letter of a column.
    ///
    /// # Panics
    ///
    /// Panics if the column is out of range.
    #[must_use]
    pub fn letter(&self, column: usize) -> Letter {
        self.letters[column]
    }

    /// Returns the column of the inverse letter.
    #[must_use]
    pub const fn inverse_column(column: usize) -> usize {
        column ^ 1
    }

    /// Returns the number of columns (generators and inverses).
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns true if there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns the number of generators.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.letters.len() / 2
    }

    /// Iterates over the generators (not their inverses) in column order.
    pub fn generators(&self) -> impl Iterator<Item = Letter> + '_ {
        self.letters.iter().step_by(2).copied()
    }

    /// Iterates over all letters in column order.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.letters.iter().copied()
    }
}
