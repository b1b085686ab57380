//! Permutations of `0..degree`.

use dashu::base::Gcd;
use dashu::integer::UBig;
use std::fmt;

use crate::error::PermError;

/// A permutation of the points `0..degree`, stored as its image list.
///
/// Permutations act on the right, matching the coset table: the product
/// `p.compose(&q)` applies `p` first, then `q`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permutation {
    images: Vec<u32>,
}

impl Permutation {
    /// Creates the identity permutation.
    #[must_use]
    pub fn identity(degree: usize) -> Self {
        Self {
            images: (0..degree as u32).collect(),
        }
    }

    /// Creates a permutation from its images.
    ///
    /// # Errors
    ///
    /// Returns `NotAPermutation` unless every point of `0..images.len()`
    /// occurs exactly once.
    pub fn from_images(images: Vec<u32>) -> Result<Self, PermError> {
        let degree = images.len();
        let mut seen = vec![false; degree];
        for &x in &images {
            let x = x as usize;
            if x >= degree || seen[x] {
                return Err(PermError::NotAPermutation { degree });
            }
            seen[x] = true;
        }
        Ok(Self { images })
    }

    /// Returns the number of points acted on.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.images.len()
    }

    /// Returns the image list.
    #[must_use]
    pub fn images(&self) -> &[u32] {
        &self.images
    }

    /// Returns the image of a point.
    ///
    /// # Panics
    ///
    /// Panics if the point is out of range.
    #[must_use]
    pub fn apply(&self, point: u32) -> u32 {
        self.images[point as usize]
    }

    /// Returns `self` followed by `other`.
    ///
    /// # Panics
    ///
    /// Panics if the degrees differ.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        assert_eq!(self.degree(), other.degree(), "composing permutations of different degree");
        Self {
            images: self.images.iter().map(|&x| other.apply(x)).collect(),
        }
    }

    /// Returns the inverse permutation.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut images = vec![0; self.degree()];
        for (x, &y) in self.images.iter().enumerate() {
            images[y as usize] = x as u32;
        }
        Self { images }
    }

    /// Returns true if every point is fixed.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.images.iter().enumerate().all(|(x, &y)| x as u32 == y)
    }

    /// Returns the non-trivial cycles, each starting at its smallest point.
    #[must_use]
    pub fn cycles(&self) -> Vec<Vec<u32>> {
        let mut seen = vec![false; self.degree()];
        let mut cycles = Vec::new();
        for start in 0..self.degree() {
            if seen[start] || self.images[start] as usize == start {
                continue;
            }
            let mut cycle = Vec::new();
            let mut x = start as u32;
            while !seen[x as usize] {
                seen[x as usize] = true;
                cycle.push(x);
                x = self.apply(x);
            }
            cycles.push(cycle);
        }
        cycles
    }

    /// Returns the order: the lcm of the cycle lengths.
    #[must_use]
    pub fn order(&self) -> UBig {
        self.cycles().iter().fold(UBig::ONE, |acc, cycle| {
            let len = UBig::from(cycle.len());
            let g = acc.clone().gcd(len.clone());
            acc * len / g
        })
    }
}

impl fmt::Debug for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Permutation({self})")
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cycles = self.cycles();
        if cycles.is_empty() {
            return write!(f, "()");
        }
        for cycle in cycles {
            write!(f, "(")?;
            for (i, x) in cycle.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{x}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
