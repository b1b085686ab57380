//! The coset table: an arena of classes and their generator edges.
//!
//! Each class owns a fixed-width row of [`CosetId`]s, one per alphabet
//! column, with [`CosetId::NULL`] marking an undefined edge. Edges are
//! always stored in both directions: `c --g--> d` implies `d --g⁻¹--> c`.

use std::collections::VecDeque;

use coxeter_words::{Alphabet, ColumnWord, Presentation, Word};
use tracing::trace;

use crate::coset::CosetId;
use crate::error::EnumerationError;
use crate::scan::{ScanLine, ScanOutcome};

/// One coset and the scan lines anchored at it.
#[derive(Clone, Debug)]
pub(crate) struct Class {
    /// Edge targets, one per alphabet column.
    pub(crate) row: Box<[CosetId]>,
    /// Unresolved scan lines anchored here.
    pub(crate) lines: Vec<ScanLine>,
    /// Surviving coset while a coincidence cascade is in flight.
    pub(crate) parent: CosetId,
}

impl Class {
    fn new(width: usize, lines: Vec<ScanLine>) -> Self {
        Self {
            row: vec![CosetId::NULL; width].into_boxed_slice(),
            lines,
            parent: CosetId::NULL,
        }
    }

    pub(crate) fn is_live(&self) -> bool {
        self.parent.is_null()
    }
}

/// Outcome of scanning every line anchored at one class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ClassScan {
    pub(crate) deductions: usize,
    pub(crate) coincidence: Option<(CosetId, CosetId)>,
}

/// A partial coset table of a subgroup `H` in a finitely presented group `G`.
#[derive(Clone, Debug)]
pub struct CosetTable {
    alphabet: Alphabet,
    /// Relators followed by subgroup generators, as columns.
    words: Vec<ColumnWord>,
    relator_count: usize,
    pub(crate) classes: Vec<Class>,
}

impl CosetTable {
    /// Creates a table holding only the base coset.
    ///
    /// The base coset carries one scan line per relator and one per
    /// subgroup generator.
    #[must_use]
    pub fn new(presentation: &Presentation) -> Self {
        let relators = presentation.relator_columns();
        let words: Vec<ColumnWord> = relators
            .iter()
            .chain(presentation.subgroup_columns())
            .cloned()
            .collect();

        let mut table = Self {
            alphabet: presentation.alphabet().clone(),
            words,
            relator_count: relators.len(),
            classes: Vec::new(),
        };

        let mut lines = table.relator_lines(CosetId::BASE);
        lines.extend(
            (table.relator_count..table.words.len())
                .map(|w| ScanLine::new(w, CosetId::BASE, table.words[w].len())),
        );
        let width = table.width();
        table.classes.push(Class::new(width, lines));
        table
    }

    fn relator_lines(&self, anchor: CosetId) -> Vec<ScanLine> {
        (0..self.relator_count)
            .map(|w| ScanLine::new(w, anchor, self.words[w].len()))
            .collect()
    }

    /// Returns the alphabet whose columns index each row.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the number of columns per row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.alphabet.len()
    }

    /// Returns the number of live cosets.
    ///
    /// Once the table is closed this is the index of the subgroup.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if the table has no cosets; the base coset is never removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Returns the word with the given index as columns.
    #[must_use]
    pub fn word(&self, index: usize) -> &[usize] {
        &self.words[index]
    }

    /// Returns the number of relators; later word indices are subgroup generators.
    #[must_use]
    pub fn relator_count(&self) -> usize {
        self.relator_count
    }

    /// Returns the edge target for `coset` along `column`, if defined.
    #[must_use]
    pub fn edge(&self, coset: CosetId, column: usize) -> Option<CosetId> {
        self.classes[coset.index()].row[column].defined()
    }

    /// Returns the row of a coset; undefined entries are [`CosetId::NULL`].
    #[must_use]
    pub fn row(&self, coset: CosetId) -> &[CosetId] {
        &self.classes[coset.index()].row
    }

    /// Iterates over all live cosets with their rows, in id order.
    pub fn rows(&self) -> impl Iterator<Item = (CosetId, &[CosetId])> + '_ {
        self.classes
            .iter()
            .enumerate()
            .map(|(i, class)| (CosetId::from_index(i), &*class.row))
    }

    /// Returns the unresolved scan lines anchored at a coset.
    #[must_use]
    pub fn lines(&self, coset: CosetId) -> &[ScanLine] {
        &self.classes[coset.index()].lines
    }

    /// Returns the total number of unresolved scan lines.
    #[must_use]
    pub fn pending_lines(&self) -> usize {
        self.classes.iter().map(|c| c.lines.len()).sum()
    }

    /// Defines `coset --column--> target` and its inverse edge.
    ///
    /// Re-adding an existing edge is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `EdgeConflict` if either direction already leads elsewhere.
    /// Contradictory edges are resolved by coincidence handling, so this
    /// indicates a logic fault in the caller.
    pub fn add_edge(&mut self, coset: CosetId, column: usize, target: CosetId) -> Result<(), EnumerationError> {
        let inverse = Alphabet::inverse_column(column);
        let existing = self.classes[coset.index()].row[column];
        let back = self.classes[target.index()].row[inverse];

        if !existing.is_null() && existing != target {
            return Err(EnumerationError::EdgeConflict {
                coset,
                column,
                existing,
                requested: target,
            });
        }
        if !back.is_null() && back != coset {
            return Err(EnumerationError::EdgeConflict {
                coset: target,
                column: inverse,
                existing: back,
                requested: coset,
            });
        }

        self.classes[coset.index()].row[column] = target;
        self.classes[target.index()].row[inverse] = coset;
        Ok(())
    }

    /// Creates a new coset as the target of `coset --column-->`.
    ///
    /// The new coset takes the next id and gets one scan line per relator.
    ///
    /// # Errors
    ///
    /// Returns `EdgeConflict` if the edge is already defined.
    pub fn define(&mut self, coset: CosetId, column: usize) -> Result<CosetId, EnumerationError> {
        if let Some(existing) = self.edge(coset, column) {
            return Err(EnumerationError::EdgeConflict {
                coset,
                column,
                existing,
                requested: CosetId::from_index(self.classes.len()),
            });
        }

        let new = CosetId::from_index(self.classes.len());
        let lines = self.relator_lines(new);
        let width = self.width();
        self.classes.push(Class::new(width, lines));
        self.add_edge(coset, column, new)?;
        trace!(%coset, column, %new, "defined coset");
        Ok(new)
    }

    /// Finds the first undefined edge, by coset id then column.
    ///
    /// This fixed order makes enumeration deterministic, and guarantees it
    /// terminates when the subgroup has finite index.
    #[must_use]
    pub fn find_definition_candidate(&self) -> Option<(CosetId, usize)> {
        self.rows().find_map(|(coset, row)| {
            row.iter()
                .position(|e| e.is_null())
                .map(|column| (coset, column))
        })
    }

    /// Returns true if every edge is defined and every scan line resolved.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.classes
            .iter()
            .all(|c| c.lines.is_empty() && c.row.iter().all(|e| !e.is_null()))
    }

    /// Advances every scan line anchored at `coset`.
    ///
    /// Completed lines are dropped and forced edges are added as they are
    /// found. Stops at the first coincidence, leaving the remaining lines
    /// for the next scan.
    pub(crate) fn scan_class(&mut self, coset: CosetId) -> Result<ClassScan, EnumerationError> {
        let mut lines = std::mem::take(&mut self.classes[coset.index()].lines);
        let mut scan = ClassScan::default();
        let mut i = 0;

        while i < lines.len() {
            let word = lines[i].word();
            match lines[i].advance(&self.words[word], self) {
                ScanOutcome::Complete => {
                    lines.remove(i);
                }
                ScanOutcome::Deduction {
                    coset: from,
                    column,
                    target,
                } => {
                    self.add_edge(from, column, target)?;
                    trace!(%from, column, %target, "deduced edge");
                    scan.deductions += 1;
                    i += 1;
                }
                ScanOutcome::Coincidence(a, b) => {
                    scan.coincidence = Some((a, b));
                    break;
                }
                ScanOutcome::Blocked => i += 1,
            }
        }

        self.classes[coset.index()].lines = lines;
        Ok(scan)
    }

    /// Follows column edges from a coset; `None` if an edge is undefined.
    #[must_use]
    pub fn trace_columns(&self, from: CosetId, columns: &[usize]) -> Option<CosetId> {
        columns
            .iter()
            .try_fold(from, |coset, &column| self.edge(coset, column))
    }

    /// Returns the coset reached by a word from the base coset.
    ///
    /// Best effort: `None` if the word leaves the alphabet or meets an
    /// undefined edge. Identity letters are skipped.
    #[must_use]
    pub fn trace(&self, word: &Word) -> Option<CosetId> {
        self.trace_from(CosetId::BASE, word)
    }

    /// Returns the coset reached by a word from a given coset.
    #[must_use]
    pub fn trace_from(&self, from: CosetId, word: &Word) -> Option<CosetId> {
        word.letters()
            .iter()
            .filter(|l| !l.is_identity())
            .try_fold(from, |coset, &letter| {
                self.edge(coset, self.alphabet.column(letter)?)
            })
    }

    /// Returns true if the word is known to lie in the subgroup.
    ///
    /// On a closed table this decides membership exactly; for the trivial
    /// subgroup it solves the word problem of the group.
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.trace(word) == Some(CosetId::BASE)
    }

    /// Returns a shortest representative word for every coset.
    ///
    /// Words are found breadth first from the base coset, trying columns in
    /// alphabet order. Cosets not reachable through defined edges get `None`.
    #[must_use]
    pub fn representatives(&self) -> Vec<Option<Word>> {
        let parents = self.spanning_tree();
        (0..self.len())
            .map(|i| {
                let coset = CosetId::from_index(i);
                if coset != CosetId::BASE && parents[i].is_none() {
                    return None;
                }
                let mut letters = Vec::new();
                let mut cur = coset;
                while let Some((prev, column)) = parents[cur.index()] {
                    letters.push(self.alphabet.letter(column));
                    cur = prev;
                }
                letters.reverse();
                Some(Word::from(letters))
            })
            .collect()
    }

    /// Returns a shortest representative word for one coset.
    #[must_use]
    pub fn representative(&self, coset: CosetId) -> Option<Word> {
        if coset.is_null() || coset.index() >= self.len() {
            return None;
        }
        self.representatives().swap_remove(coset.index())
    }

    /// Breadth-first tree over defined edges: parent and column per coset.
    fn spanning_tree(&self) -> Vec<Option<(CosetId, usize)>> {
        let mut parents = vec![None; self.len()];
        let mut seen = vec![false; self.len()];
        seen[0] = true;

        let mut queue = VecDeque::from([CosetId::BASE]);
        while let Some(coset) = queue.pop_front() {
            for (column, &next) in self.row(coset).iter().enumerate() {
                if next.is_null() || seen[next.index()] {
                    continue;
                }
                seen[next.index()] = true;
                parents[next.index()] = Some((coset, column));
                queue.push_back(next);
            }
        }
        parents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(relators: &[&str], subgroup: &[&str]) -> CosetTable {
        CosetTable::new(&Presentation::parse(relators, subgroup).unwrap())
    }

    #[test]
    fn test_new_table_has_base_only() {
        let t = table(&["aa", "bbb"], &["ab"]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.width(), 4);
        assert_eq!(t.lines(CosetId::BASE).len(), 3);
        assert_eq!(t.relator_count(), 2);
        assert!(!t.is_closed());
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut t = table(&["aaa"], &[]);
        let two = t.define(CosetId::BASE, 0).unwrap();
        assert_eq!(two, CosetId::new(2));
        assert_eq!(t.edge(CosetId::BASE, 0), Some(two));
        assert_eq!(t.edge(two, 1), Some(CosetId::BASE));
        assert_eq!(t.edge(two, 0), None);
        // New cosets carry one line per relator.
        assert_eq!(t.lines(two).len(), 1);
    }

    #[test]
    fn test_add_edge_rejects_redirect() {
        let mut t = table(&["aaa"], &[]);
        let two = t.define(CosetId::BASE, 0).unwrap();
        let three = t.define(two, 0).unwrap();
        assert!(t.add_edge(CosetId::BASE, 0, two).is_ok());
        assert_eq!(
            t.add_edge(CosetId::BASE, 0, three),
            Err(EnumerationError::EdgeConflict {
                coset: CosetId::BASE,
                column: 0,
                existing: two,
                requested: three,
            })
        );
        assert!(t.define(CosetId::BASE, 0).is_err());
    }

    #[test]
    fn test_definition_candidate_order() {
        let mut t = table(&["aa", "bb"], &[]);
        assert_eq!(t.find_definition_candidate(), Some((CosetId::BASE, 0)));
        let two = t.define(CosetId::BASE, 0).unwrap();
        assert_eq!(t.find_definition_candidate(), Some((CosetId::BASE, 1)));
        t.add_edge(CosetId::BASE, 1, two).unwrap();
        assert_eq!(t.find_definition_candidate(), Some((CosetId::BASE, 2)));
    }

    #[test]
    fn test_trace_and_representatives() {
        let mut t = table(&["aaa"], &[]);
        let two = t.define(CosetId::BASE, 0).unwrap();
        let three = t.define(two, 0).unwrap();

        let aa = Word::from_letters("aa").unwrap();
        assert_eq!(t.trace(&aa), Some(three));
        assert_eq!(t.trace(&Word::from_letters("aaa").unwrap()), None);
        assert_eq!(t.trace(&Word::from_letters("b").unwrap()), None);
        assert_eq!(t.trace(&Word::from_letters("1").unwrap()), Some(CosetId::BASE));

        let reps = t.representatives();
        assert_eq!(reps[0], Some(Word::new()));
        assert_eq!(reps[2], Some(aa));
        assert_eq!(t.representative(two), Some(Word::from_letters("a").unwrap()));
        assert_eq!(t.representative(CosetId::NULL), None);
    }
}
