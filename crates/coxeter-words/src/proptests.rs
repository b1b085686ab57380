//! Property-based tests for word operations.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Letter, Word};

    // Strategy for words over the first three generators and their inverses
    fn small_word() -> impl Strategy<Value = Word> {
        proptest::collection::vec(prop_oneof![(-3i32..=-1i32), (1i32..=3i32)], 0..12)
            .prop_map(|raw| raw.into_iter().filter_map(Letter::from_raw).collect())
    }

    proptest! {
        #[test]
        fn inverse_is_involution(w in small_word()) {
            prop_assert_eq!(w.inverse().inverse(), w);
        }

        #[test]
        fn word_times_inverse_reduces_to_empty(w in small_word()) {
            prop_assert!(w.concat(&w.inverse()).free_reduce().is_empty());
        }

        #[test]
        fn free_reduce_is_idempotent(w in small_word()) {
            let once = w.free_reduce();
            prop_assert_eq!(once.free_reduce(), once);
        }

        #[test]
        fn free_reduce_never_lengthens(w in small_word()) {
            prop_assert!(w.free_reduce().len() <= w.len());
            prop_assert_eq!(w.free_reduce().len() % 2, w.len() % 2);
        }

        #[test]
        fn cyclic_reduction_has_no_cancelling_ends(w in small_word()) {
            let c = w.cyclically_reduce();
            let letters = c.letters();
            if letters.len() >= 2 {
                prop_assert_ne!(letters[0], letters[letters.len() - 1].invert());
            }
        }

        #[test]
        fn display_round_trips(w in small_word()) {
            prop_assume!(!w.is_empty());
            let parsed = Word::from_letters(&w.to_string()).unwrap();
            prop_assert_eq!(parsed, w);
        }

        #[test]
        fn power_length(w in small_word(), n in -4i32..=4) {
            prop_assert_eq!(w.power(n).len(), w.len() * n.unsigned_abs() as usize);
        }
    }
}
