//! Permutation groups via a deterministic Schreier–Sims construction.
//!
//! Levels are indexed by point, from the highest point down. Level `k`
//! holds transversal elements `σ[k][j]`, each fixing every point above `k`
//! and sending `k` to `j`, plus the generators `T[k]` added at that level.
//! The group order is the product of the transversal sizes.

use dashu::integer::UBig;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::PermError;
use crate::permutation::Permutation;

/// Pending work while extending the stabilizer chain.
enum Task {
    /// Add a generator at a level.
    Extend(usize, Permutation),
    /// Fold a product into a level's transversal.
    Sift(usize, Permutation),
}

/// A permutation group with a strong generating set.
#[derive(Clone, Debug)]
pub struct PermGroup {
    degree: usize,
    generators: Vec<Permutation>,
    transversals: Vec<FxHashMap<u32, Permutation>>,
    level_gens: Vec<Vec<Permutation>>,
}

impl PermGroup {
    /// Builds the group generated by some permutations of `0..degree`.
    ///
    /// # Errors
    ///
    /// Returns `DegreeMismatch` if a generator has another degree.
    pub fn new(degree: usize, generators: Vec<Permutation>) -> Result<Self, PermError> {
        if let Some(bad) = generators.iter().find(|g| g.degree() != degree) {
            return Err(PermError::DegreeMismatch {
                expected: degree,
                found: bad.degree(),
            });
        }

        let mut transversals = vec![FxHashMap::default(); degree];
        for (k, level) in transversals.iter_mut().enumerate() {
            level.insert(k as u32, Permutation::identity(degree));
        }
        let mut group = Self {
            degree,
            generators: Vec::new(),
            transversals,
            level_gens: vec![Vec::new(); degree],
        };

        for g in generators {
            if let Some(top) = degree.checked_sub(1) {
                if !group.sifts_through(top, &g) {
                    group.extend(top, g.clone());
                }
            }
            group.generators.push(g);
        }

        debug!(degree, base = ?group.base(), "built stabilizer chain");
        Ok(group)
    }

    /// Returns the number of points acted on.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the generators as given.
    #[must_use]
    pub fn generators(&self) -> &[Permutation] {
        &self.generators
    }

    /// Returns the base: points with a non-trivial basic orbit, highest first.
    #[must_use]
    pub fn base(&self) -> Vec<u32> {
        (0..self.degree)
            .rev()
            .filter(|&k| self.transversals[k].len() > 1)
            .map(|k| k as u32)
            .collect()
    }

    /// Returns the sizes of the basic orbits along the base.
    #[must_use]
    pub fn orbit_sizes(&self) -> Vec<usize> {
        self.base()
            .into_iter()
            .map(|k| self.transversals[k as usize].len())
            .collect()
    }

    /// Returns the group order.
    #[must_use]
    pub fn order(&self) -> UBig {
        self.transversals
            .iter()
            .fold(UBig::ONE, |acc, level| acc * UBig::from(level.len()))
    }

    /// Returns true if the permutation lies in the group.
    #[must_use]
    pub fn contains(&self, perm: &Permutation) -> bool {
        if perm.degree() != self.degree {
            return false;
        }
        match self.degree.checked_sub(1) {
            Some(top) => self.sifts_through(top, perm),
            None => true,
        }
    }

    /// Sifts `perm` down from level `top`; true if it reduces to the identity.
    ///
    /// `perm` must fix every point above `top`.
    fn sifts_through(&self, top: usize, perm: &Permutation) -> bool {
        let mut p = perm.clone();
        for k in (0..=top).rev() {
            let j = p.apply(k as u32);
            match self.transversals[k].get(&j) {
                Some(s) => p = p.compose(&s.inverse()),
                None => return false,
            }
        }
        p.is_identity()
    }

    /// Adds `gen` as a generator at `level` and closes the chain again.
    ///
    /// Uses an explicit stack in place of mutual recursion between
    /// extending a level and sifting products into it.
    fn extend(&mut self, level: usize, gen: Permutation) {
        let mut stack = vec![Task::Extend(level, gen)];

        while let Some(task) = stack.pop() {
            match task {
                Task::Extend(k, p) => {
                    for s in self.transversals[k].values() {
                        stack.push(Task::Sift(k, s.compose(&p)));
                    }
                    self.level_gens[k].push(p);
                }
                Task::Sift(k, p) => {
                    let j = p.apply(k as u32);
                    if let Some(s) = self.transversals[k].get(&j) {
                        let q = p.compose(&s.inverse());
                        if k > 0 && !self.sifts_through(k - 1, &q) {
                            stack.push(Task::Extend(k - 1, q));
                        }
                    } else {
                        for t in &self.level_gens[k] {
                            stack.push(Task::Sift(k, p.compose(t)));
                        }
                        self.transversals[k].insert(j, p);
                    }
                }
            }
        }
    }
}
