//! Property-based tests for permutations and permutation groups.

#[cfg(test)]
mod tests {
    use dashu::integer::UBig;
    use proptest::prelude::*;

    use coxeter_enum::{enumerate, EnumerationConfig};
    use coxeter_words::{Letter, Presentation, Word};

    use crate::{PermGroup, Permutation, PermutationRepresentation};

    // Strategy for random permutations of a small degree
    fn permutation(degree: usize) -> impl Strategy<Value = Permutation> {
        Just((0..degree as u32).collect::<Vec<u32>>())
            .prop_shuffle()
            .prop_map(|images| Permutation::from_images(images).unwrap())
    }

    fn factorial(n: u32) -> UBig {
        (1..=n).fold(UBig::ONE, |acc, k| acc * UBig::from(k))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn inverse_cancels(p in permutation(7)) {
            prop_assert!(p.compose(&p.inverse()).is_identity());
        }

        #[test]
        fn compose_is_associative(p in permutation(6), q in permutation(6), r in permutation(6)) {
            prop_assert_eq!(p.compose(&q).compose(&r), p.compose(&q.compose(&r)));
        }

        #[test]
        fn order_is_first_trivial_power(p in permutation(8)) {
            let mut power = p.clone();
            let mut k = 1u32;
            while !power.is_identity() {
                power = power.compose(&p);
                k += 1;
            }
            prop_assert_eq!(p.order(), UBig::from(k));
        }

        #[test]
        fn group_contains_its_generators(p in permutation(6), q in permutation(6)) {
            let g = PermGroup::new(6, vec![p.clone(), q.clone()]).unwrap();
            prop_assert!(g.contains(&p));
            prop_assert!(g.contains(&q));
            prop_assert!(g.contains(&p.compose(&q).inverse()));
        }

        #[test]
        fn group_order_divides_factorial(p in permutation(6), q in permutation(6)) {
            let g = PermGroup::new(6, vec![p, q]).unwrap();
            let order = g.order();
            prop_assert_eq!(factorial(6) % &order, UBig::ZERO);
        }

        #[test]
        fn dihedral_representation_has_order_2n(n in 2usize..=10) {
            let rel = "ab".repeat(n);
            let p = Presentation::parse(&["aa", "bb", rel.as_str()], &["1"]).unwrap();
            let table = enumerate(&p, EnumerationConfig::default()).unwrap();
            let rep = PermutationRepresentation::from_table(&table).unwrap();
            prop_assert_eq!(rep.group().unwrap().order(), UBig::from(2 * n));
            for relator in p.relators() {
                prop_assert!(rep.satisfies(relator).unwrap());
            }
        }

        #[test]
        fn word_images_multiply(
            n in 3usize..=7,
            raw in proptest::collection::vec(prop_oneof![Just(1i32), Just(-1), Just(2), Just(-2)], 0..10),
        ) {
            let rel = "ab".repeat(n);
            let p = Presentation::parse(&["aa", "bb", rel.as_str()], &["1"]).unwrap();
            let table = enumerate(&p, EnumerationConfig::default()).unwrap();
            let rep = PermutationRepresentation::from_table(&table).unwrap();

            let word: Word = raw.into_iter().filter_map(Letter::from_raw).collect();
            let image = rep.image_of_word(&word).unwrap();
            let inverse = rep.image_of_word(&word.inverse()).unwrap();
            prop_assert!(image.compose(&inverse).is_identity());
        }
    }
}
