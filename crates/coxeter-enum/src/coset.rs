//! Coset identifiers.
//!
//! Cosets are addressed by dense 32-bit ids rather than references, so the
//! mutually-referencing class graph lives in a flat arena.

use std::fmt;

/// Identifier of a coset (class) in the table.
///
/// Id `0` is the null sentinel for an undefined edge and id `1` is always
/// the base coset `H` itself. Live ids are contiguous from 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CosetId(u32);

impl CosetId {
    /// The null sentinel: no coset.
    pub const NULL: Self = Self(0);

    /// The base coset, representing the subgroup itself.
    pub const BASE: Self = Self(1);

    /// Creates an id from its raw value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Creates the id stored at a 0-based arena index.
    ///
    /// # Panics
    ///
    /// Panics if the index does not fit in 32 bits.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < u32::MAX as usize, "coset arena capacity exceeded");
        Self(index as u32 + 1)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the 0-based arena index of this id.
    ///
    /// Must not be called on [`CosetId::NULL`].
    #[must_use]
    pub const fn index(self) -> usize {
        debug_assert!(self.0 != 0, "null coset has no index");
        (self.0 - 1) as usize
    }

    /// Returns true for the null sentinel.
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Converts the sentinel into `None`.
    #[must_use]
    pub const fn defined(self) -> Option<Self> {
        if self.0 == 0 {
            None
        } else {
            Some(self)
        }
    }
}

impl fmt::Debug for CosetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "Coset(-)")
        } else {
            write!(f, "Coset({})", self.0)
        }
    }
}

impl fmt::Display for CosetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
