//! Coincidence handling: merging cosets found to be equal.
//!
//! A coincidence `(a, b)` keeps the lower id and folds the other coset
//! into it. Folding can expose further coincidences (two different edges
//! along the same column), which are queued and processed in order until
//! the cascade settles. Cosets merged during a cascade forward to their
//! survivor; once the queue is empty the live cosets are renumbered to
//! close the gaps. Renumbering preserves relative order, so survivors
//! (always the minimum) and the final ids are the same as if the table
//! were compacted after every single merge.

use std::collections::VecDeque;

use coxeter_words::Alphabet;
use tracing::debug;

use crate::coset::CosetId;
use crate::table::CosetTable;

impl CosetTable {
    /// Merges two cosets and every coincidence that follows from it.
    ///
    /// Returns the number of cosets removed. All edges and scan-line
    /// cursors are rewritten, and ids are compacted, before this returns.
    pub fn merge(&mut self, a: CosetId, b: CosetId) -> usize {
        let mut queue = VecDeque::from([(a, b)]);
        let mut merged = 0;

        while let Some((x, y)) = queue.pop_front() {
            let x = self.find(x);
            let y = self.find(y);
            if x == y {
                continue;
            }
            let (keep, lose) = if x < y { (x, y) } else { (y, x) };
            self.fold(keep, lose, &mut queue);
            merged += 1;
        }

        if merged > 0 {
            let before = self.len();
            self.compact();
            debug!(%a, %b, merged, before, after = self.len(), "resolved coincidence");
        }
        merged
    }

    /// Returns the live coset a (possibly merged) coset forwards to.
    pub(crate) fn find(&mut self, coset: CosetId) -> CosetId {
        let mut root = coset;
        while !self.classes[root.index()].parent.is_null() {
            root = self.classes[root.index()].parent;
        }

        let mut cur = coset;
        while cur != root {
            let next = self.classes[cur.index()].parent;
            self.classes[cur.index()].parent = root;
            cur = next;
        }
        root
    }

    /// Moves every edge of `lose` onto `keep` and retires `lose`.
    fn fold(&mut self, keep: CosetId, lose: CosetId, queue: &mut VecDeque<(CosetId, CosetId)>) {
        self.classes[lose.index()].parent = keep;
        // The survivor already carries a line for every relator.
        self.classes[lose.index()].lines.clear();

        for column in 0..self.width() {
            let target = self.classes[lose.index()].row[column];
            if target.is_null() {
                continue;
            }

            let inverse = Alphabet::inverse_column(column);
            self.classes[lose.index()].row[column] = CosetId::NULL;
            if self.classes[target.index()].row[inverse] == lose {
                self.classes[target.index()].row[inverse] = CosetId::NULL;
            }

            let target = if target == lose { keep } else { target };
            self.join(keep, column, target, queue);
        }
    }

    /// Records `keep --column--> target`, queueing coincidences on conflict.
    fn join(
        &mut self,
        keep: CosetId,
        column: usize,
        target: CosetId,
        queue: &mut VecDeque<(CosetId, CosetId)>,
    ) {
        let inverse = Alphabet::inverse_column(column);
        let forward = self.classes[keep.index()].row[column];
        let back = self.classes[target.index()].row[inverse];

        if forward == target {
            return;
        }
        if !forward.is_null() {
            queue.push_back((forward, target));
        }
        if !back.is_null() && back != keep {
            queue.push_back((back, keep));
        }
        if forward.is_null() && back.is_null() {
            self.classes[keep.index()].row[column] = target;
            self.classes[target.index()].row[inverse] = keep;
        }
    }

    /// Drops merged cosets and renumbers the rest contiguously from 1.
    fn compact(&mut self) {
        let mut renumbered = vec![CosetId::NULL; self.classes.len()];
        let mut next = 0;
        for (i, class) in self.classes.iter().enumerate() {
            if class.is_live() {
                renumbered[i] = CosetId::from_index(next);
                next += 1;
            }
        }

        let map: Vec<CosetId> = (0..self.classes.len())
            .map(|i| renumbered[self.find(CosetId::from_index(i)).index()])
            .collect();

        self.classes.retain(|class| class.is_live());
        for class in &mut self.classes {
            for edge in class.row.iter_mut().filter(|e| !e.is_null()) {
                *edge = map[edge.index()];
            }
            for line in &mut class.lines {
                line.relabel(|c| map[c.index()]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coxeter_words::Presentation;

    fn table(relators: &[&str]) -> CosetTable {
        CosetTable::new(&Presentation::parse(relators, &[]).unwrap())
    }

    fn assert_symmetric(t: &CosetTable) {
        for (coset, row) in t.rows() {
            for (column, &target) in row.iter().enumerate() {
                if let Some(target) = target.defined() {
                    assert_eq!(
                        t.edge(target, Alphabet::inverse_column(column)),
                        Some(coset),
                        "edge {coset} --{column}--> {target} has no inverse"
                    );
                }
            }
        }
    }

    #[test]
    fn test_merge_keeps_lower_id() {
        // 1 -a-> 2 -a-> 3 -a-> 4, then 4 = 1 closes a 3-cycle.
        let mut t = table(&["aaa"]);
        let two = t.define(CosetId::BASE, 0).unwrap();
        let three = t.define(two, 0).unwrap();
        let four = t.define(three, 0).unwrap();

        assert_eq!(t.merge(four, CosetId::BASE), 1);
        assert_eq!(t.len(), 3);
        assert_eq!(t.edge(three, 0), Some(CosetId::BASE));
        assert_eq!(t.edge(CosetId::BASE, 1), Some(three));
        assert_symmetric(&t);
    }

    #[test]
    fn test_merge_compacts_ids() {
        // 1 -a-> 2, 1 -b-> 3 -a-> 4; merging 2 and 3 renumbers 4 to 3.
        let mut t = table(&["aa", "bb"]);
        let two = t.define(CosetId::BASE, 0).unwrap();
        let three = t.define(CosetId::BASE, 2).unwrap();
        t.define(three, 0).unwrap();

        assert_eq!(t.merge(three, two), 1);
        assert_eq!(t.len(), 3);
        assert_eq!(t.edge(CosetId::BASE, 0), Some(two));
        assert_eq!(t.edge(CosetId::BASE, 2), Some(two));
        assert_eq!(t.edge(two, 0), Some(three));
        assert_eq!(t.edge(three, 1), Some(two));
        assert_symmetric(&t);
    }

    #[test]
    fn test_merge_cascades() {
        // Two a-chains out of 1: 1 -a-> 2 -a-> 3 and 1 -b-> 4 -a-> 5.
        // Merging 2 and 4 forces 3 = 5.
        let mut t = table(&["aa", "bb"]);
        let two = t.define(CosetId::BASE, 0).unwrap();
        let three = t.define(two, 0).unwrap();
        let four = t.define(CosetId::BASE, 2).unwrap();
        let five = t.define(four, 0).unwrap();
        assert_eq!(five, CosetId::new(5));

        let merged = t.merge(two, four);
        assert_eq!(merged, 2);
        assert_eq!(t.len(), 3);
        assert_eq!(t.edge(CosetId::BASE, 0), Some(two));
        assert_eq!(t.edge(CosetId::BASE, 2), Some(two));
        assert_eq!(t.edge(two, 0), Some(three));
        assert_symmetric(&t);
    }

    #[test]
    fn test_merge_into_base_keeps_self_loops() {
        // 1 -a-> 2 with 2 -b-> 2; merging 2 into 1 leaves only loops.
        let mut t = table(&["aa", "bb"]);
        let two = t.define(CosetId::BASE, 0).unwrap();
        t.add_edge(two, 2, two).unwrap();

        assert_eq!(t.merge(two, CosetId::BASE), 1);
        assert_eq!(t.len(), 1);
        for column in 0..4 {
            assert_eq!(t.edge(CosetId::BASE, column), Some(CosetId::BASE));
        }
        assert_symmetric(&t);
    }

    #[test]
    fn test_merge_same_coset_is_noop() {
        let mut t = table(&["aa"]);
        let two = t.define(CosetId::BASE, 0).unwrap();
        assert_eq!(t.merge(two, two), 0);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_merge_rewrites_scan_cursors() {
        let mut t = table(&["aaa"]);
        let two = t.define(CosetId::BASE, 0).unwrap();
        let three = t.define(two, 0).unwrap();
        // First scan deduces 3 -a-> 1, second resolves the base line.
        assert_eq!(t.scan_class(CosetId::BASE).unwrap().deductions, 1);
        t.scan_class(CosetId::BASE).unwrap();
        assert!(t.lines(CosetId::BASE).is_empty());

        // a = a² forces a = 1, collapsing the table onto the base coset.
        assert_eq!(t.merge(three, two), 2);
        assert_eq!(t.len(), 1);
        for line in t.lines(CosetId::BASE) {
            assert_eq!(line.anchor(), CosetId::BASE);
            assert_eq!(line.forward_cursor().0, CosetId::BASE);
            assert_eq!(line.backward_cursor().0, CosetId::BASE);
        }
        assert_symmetric(&t);
    }
}
