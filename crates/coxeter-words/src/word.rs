//! Words over signed letters.

use smallvec::SmallVec;
use std::fmt;

use crate::error::MalformedPresentation;
use crate::letter::Letter;

/// A word in the generators and their inverses.
///
/// Words are not reduced automatically; `free_reduce` and
/// `cyclically_reduce` do that on request.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Word(SmallVec<[Letter; 16]>);

impl Word {
    /// Creates the empty word.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a word from letters.
    #[must_use]
    pub fn from_slice(letters: &[Letter]) -> Self {
        Self(SmallVec::from_slice(letters))
    }

    /// Expands a letter string such as `"abAB"` into a word.
    ///
    /// Each character is one letter; there is no exponent syntax.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLetter` for a character that is not a letter or the
    /// identity character.
    pub fn from_letters(s: &str) -> Result<Self, MalformedPresentation> {
        s.chars()
            .map(|c| Letter::from_char(c).ok_or(MalformedPresentation::InvalidLetter(c)))
            .collect()
    }

    /// Returns the letters of this word.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the word has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the word is exactly the identity letter.
    #[must_use]
    pub fn is_identity_word(&self) -> bool {
        self.0.len() == 1 && self.0[0].is_identity()
    }

    /// Returns true if the identity letter occurs anywhere in the word.
    #[must_use]
    pub fn contains_identity(&self) -> bool {
        self.0.iter().any(|l| l.is_identity())
    }

    /// Appends a letter.
    pub fn push(&mut self, letter: Letter) {
        self.0.push(letter);
    }

    /// Returns the formal inverse: letters reversed and inverted.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.0.iter().rev().map(|l| l.invert()).collect()
    }

    /// Returns the concatenation `self · other`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        self.0.iter().chain(other.0.iter()).copied().collect()
    }

    /// Returns `self` raised to an integer power.
    ///
    /// Negative exponents use the inverse word.
    #[must_use]
    pub fn power(&self, exp: i32) -> Self {
        let base = if exp < 0 { self.inverse() } else { self.clone() };
        let mut out = Self(SmallVec::with_capacity(base.len() * exp.unsigned_abs() as usize));
        for _ in 0..exp.unsigned_abs() {
            out.0.extend_from_slice(&base.0);
        }
        out
    }

    /// Cancels adjacent inverse pairs and drops identity letters.
    #[must_use]
    pub fn free_reduce(&self) -> Self {
        let mut stack: SmallVec<[Letter; 16]> = SmallVec::new();
        for &letter in self.0.iter().filter(|l| !l.is_identity()) {
            if stack.last() == Some(&letter.invert()) {
                stack.pop();
            } else {
                stack.push(letter);
            }
        }
        Self(stack)
    }

    /// Freely reduces, then cancels inverse pairs across the ends.
    #[must_use]
    pub fn cyclically_reduce(&self) -> Self {
        let reduced = self.free_reduce();
        let letters = reduced.letters();
        let mut lo = 0;
        let mut hi = letters.len();
        while hi - lo >= 2 && letters[lo] == letters[hi - 1].invert() {
            lo += 1;
            hi -= 1;
        }
        Self::from_slice(&letters[lo..hi])
    }
}

impl FromIterator<Letter> for Word {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Letter>> for Word {
    fn from(letters: Vec<Letter>) -> Self {
        Self(SmallVec::from_vec(letters))
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word(\"{self}\")")
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{}", crate::letter::IDENTITY_CHAR);
        }
        for letter in &self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
