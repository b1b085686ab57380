//! Signed generator letters.
//!
//! A letter is a signed integer: `+k` is the k-th generator, `-k` its
//! formal inverse, and `0` the reserved identity letter. Letters are
//! written as `a..z` for generators and `A..Z` for their inverses.

use std::fmt;

/// Character used for the reserved identity letter.
pub const IDENTITY_CHAR: char = '1';

/// A signed generator letter.
///
/// This is a lightweight copyable value; ordering follows the signed
/// integer, so `a⁻¹ < 1 < a`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(i32);

impl Letter {
    /// The reserved identity letter.
    pub const IDENTITY: Self = Self(0);

    /// Creates the letter for the generator with 1-based index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is zero or greater than `i32::MAX`.
    #[must_use]
    pub const fn generator(index: u32) -> Self {
        assert!(index > 0, "generator indices start at 1");
        assert!(index <= i32::MAX as u32, "generator index out of range");
        Self(index as i32)
    }

    /// Creates a letter from its raw signed value.
    ///
    /// Returns `None` for `i32::MIN`, which has no inverse letter.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Option<Self> {
        if raw == i32::MIN {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Returns the raw signed value.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Returns the formal inverse of this letter.
    ///
    /// The identity letter is its own inverse.
    #[must_use]
    pub const fn invert(self) -> Self {
        Self(-self.0)
    }

    /// Returns true for the reserved identity letter.
    #[must_use]
    pub const fn is_identity(self) -> bool {
        self.0 == 0
    }

    /// Returns true if this letter is the inverse of a generator.
    #[must_use]
    pub const fn is_inverse(self) -> bool {
        self.0 < 0
    }

    /// Returns the 1-based generator index, ignoring the sign.
    #[must_use]
    pub const fn generator_index(self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Returns the positive (generator) form of this letter.
    #[must_use]
    pub const fn positive(self) -> Self {
        Self(self.0.abs())
    }

    /// Reads a letter from a character.
    ///
    /// Returns `None` for characters outside `a..z`, `A..Z` and the
    /// identity character.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='z' => Some(Self(i32::from(c as u8 - b'a') + 1)),
            'A'..='Z' => Some(Self(-(i32::from(c as u8 - b'A') + 1))),
            IDENTITY_CHAR => Some(Self::IDENTITY),
            _ => None,
        }
    }

    /// Writes this letter as a character, if it has a single-character name.
    #[must_use]
    pub fn to_char(self) -> Option<char> {
        let index = self.generator_index();
        if self.is_identity() {
            return Some(IDENTITY_CHAR);
        }
        if index > 26 {
            return None;
        }
        let offset = (index - 1) as u8;
        Some(if self.is_inverse() {
            char::from(b'A' + offset)
        } else {
            char::from(b'a' + offset)
        })
    }
}

impl fmt::Debug for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Letter({})", self.0)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_char() {
            Some(c) => write!(f, "{c}"),
            None if self.is_inverse() => write!(f, "x{}^-1", self.generator_index()),
            None => write!(f, "x{}", self.generator_index()),
        }
    }
}
