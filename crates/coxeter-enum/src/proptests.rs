//! Property-based tests for coset enumeration.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use coxeter_words::{Alphabet, Letter, Presentation, Word};

    use crate::{enumerate, CosetId, CosetTable, EnumerationConfig};

    fn gcd(a: usize, b: usize) -> usize {
        if b == 0 {
            a
        } else {
            gcd(b, a % b)
        }
    }

    fn dihedral(n: usize) -> Presentation {
        let rel = "ab".repeat(n);
        Presentation::parse(&["aa", "bb", rel.as_str()], &["1"]).unwrap()
    }

    fn closed_table(p: &Presentation) -> CosetTable {
        enumerate(p, EnumerationConfig::default()).unwrap()
    }

    // Strategy for words over a and b with inverses
    fn word_ab() -> impl Strategy<Value = Word> {
        proptest::collection::vec(prop_oneof![Just(1i32), Just(-1), Just(2), Just(-2)], 0..16)
            .prop_map(|raw| raw.into_iter().filter_map(Letter::from_raw).collect())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn dihedral_order_is_2n(n in 2usize..=12) {
            prop_assert_eq!(closed_table(&dihedral(n)).len(), 2 * n);
        }

        #[test]
        fn cyclic_subgroup_index_is_gcd(n in 1usize..=24, k in 1usize..=24) {
            let rel = "a".repeat(n);
            let gen = "a".repeat(k);
            let p = Presentation::parse(&[rel.as_str()], &[gen.as_str()]).unwrap();
            prop_assert_eq!(closed_table(&p).len(), gcd(n, k));
        }

        #[test]
        fn closed_tables_satisfy_every_relator(n in 2usize..=9) {
            let table = closed_table(&dihedral(n));
            prop_assert!(table.is_closed());
            for (coset, row) in table.rows() {
                prop_assert!(row.iter().all(|e| !e.is_null()));
                for (column, &target) in row.iter().enumerate() {
                    prop_assert_eq!(table.edge(target, Alphabet::inverse_column(column)), Some(coset));
                }
                for r in 0..table.relator_count() {
                    prop_assert_eq!(table.trace_columns(coset, table.word(r)), Some(coset));
                }
            }
        }

        #[test]
        fn word_times_inverse_returns_home(n in 2usize..=7, w in word_ab()) {
            let table = closed_table(&dihedral(n));
            let there = table.trace(&w).unwrap();
            prop_assert_eq!(table.trace_from(there, &w.inverse()), Some(CosetId::BASE));
            prop_assert!(table.contains(&w.concat(&w.inverse())));
        }

        #[test]
        fn enumeration_is_deterministic(n in 2usize..=9) {
            let p = dihedral(n);
            let a = closed_table(&p);
            let b = closed_table(&p);
            let rows_a: Vec<Vec<CosetId>> = a.rows().map(|(_, r)| r.to_vec()).collect();
            let rows_b: Vec<Vec<CosetId>> = b.rows().map(|(_, r)| r.to_vec()).collect();
            prop_assert_eq!(rows_a, rows_b);
        }

        #[test]
        fn representatives_reach_their_cosets(n in 2usize..=9) {
            let table = closed_table(&dihedral(n));
            for (i, rep) in table.representatives().into_iter().enumerate() {
                let rep = rep.unwrap();
                prop_assert_eq!(table.trace(&rep), Some(CosetId::from_index(i)));
            }
        }
    }
}
