//! Scan lines: tracked occurrences of relators and subgroup generators.
//!
//! A scan line follows one word from its anchor coset with two cursors.
//! The forward cursor reads the word left to right along defined edges,
//! the backward cursor reads it right to left along inverse edges. When
//! they meet the word is either satisfied at the anchor, or the two cursor
//! cosets must be the same coset.

use coxeter_words::Alphabet;

use crate::coset::CosetId;
use crate::table::CosetTable;

/// Result of advancing a scan line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The cursors met at the same coset; the line is resolved.
    Complete,
    /// The cursors met at different cosets, which must coincide.
    Coincidence(CosetId, CosetId),
    /// A single letter separates the cursors; the edge is forced.
    Deduction {
        /// Coset at the forward cursor.
        coset: CosetId,
        /// Column of the missing letter.
        column: usize,
        /// Coset at the backward cursor.
        target: CosetId,
    },
    /// At least two letters are undefined between the cursors.
    Blocked,
}

/// One instance of a word anchored at a coset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanLine {
    /// Index of the word in the table's word list.
    word: usize,
    /// Coset the word starts and ends at.
    anchor: CosetId,
    /// Coset reached by reading `word[..fwd_pos]` from the anchor.
    fwd: CosetId,
    fwd_pos: usize,
    /// Coset reached by reading `word[bwd_pos..]` backwards from the anchor.
    bwd: CosetId,
    bwd_pos: usize,
}

impl ScanLine {
    /// Creates an unscanned line for a word of length `len`.
    #[must_use]
    pub fn new(word: usize, anchor: CosetId, len: usize) -> Self {
        Self {
            word,
            anchor,
            fwd: anchor,
            fwd_pos: 0,
            bwd: anchor,
            bwd_pos: len,
        }
    }

    /// Returns the index of the scanned word.
    #[must_use]
    pub fn word(&self) -> usize {
        self.word
    }

    /// Returns the anchor coset.
    #[must_use]
    pub fn anchor(&self) -> CosetId {
        self.anchor
    }

    /// Returns the forward cursor as (coset, letters consumed).
    #[must_use]
    pub fn forward_cursor(&self) -> (CosetId, usize) {
        (self.fwd, self.fwd_pos)
    }

    /// Returns the backward cursor as (coset, position).
    #[must_use]
    pub fn backward_cursor(&self) -> (CosetId, usize) {
        (self.bwd, self.bwd_pos)
    }

    /// Returns the number of letters not yet covered by either cursor.
    #[must_use]
    pub fn gap(&self) -> usize {
        self.bwd_pos - self.fwd_pos
    }

    /// Moves both cursors inward along defined edges.
    ///
    /// The forward cursor always moves first. Cursors never pass each
    /// other, so each call does at most `word.len()` edge lookups.
    pub fn advance(&mut self, word: &[usize], table: &CosetTable) -> ScanOutcome {
        while self.fwd_pos < self.bwd_pos {
            match table.edge(self.fwd, word[self.fwd_pos]) {
                Some(next) => {
                    self.fwd = next;
                    self.fwd_pos += 1;
                }
                None => break,
            }
        }

        while self.bwd_pos > self.fwd_pos {
            let column = Alphabet::inverse_column(word[self.bwd_pos - 1]);
            match table.edge(self.bwd, column) {
                Some(prev) => {
                    self.bwd = prev;
                    self.bwd_pos -= 1;
                }
                None => break,
            }
        }

        match self.gap() {
            0 if self.fwd == self.bwd => ScanOutcome::Complete,
            0 => ScanOutcome::Coincidence(self.fwd, self.bwd),
            1 => ScanOutcome::Deduction {
                coset: self.fwd,
                column: word[self.fwd_pos],
                target: self.bwd,
            },
            _ => ScanOutcome::Blocked,
        }
    }

    /// Rewrites every coset this line refers to.
    pub(crate) fn relabel(&mut self, map: impl Fn(CosetId) -> CosetId) {
        self.anchor = map(self.anchor);
        self.fwd = map(self.fwd);
        self.bwd = map(self.bwd);
    }
}
