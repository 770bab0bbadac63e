//! Properties of the non-empty capability.

use super::common::{int_vec_strategy, non_empty_vec_strategy};
use lightcap::{NonEmpty, NonEmptyVec};
use proptest::prelude::*;

proptest! {
    /// Property: the constructor fails exactly on empty input
    #[test]
    fn prop_from_slice_none_iff_empty(v in int_vec_strategy()) {
        prop_assert_eq!(NonEmpty::from_slice(&v).is_none(), v.is_empty());
        prop_assert_eq!(NonEmptyVec::from_vec(v.clone()).is_none(), v.is_empty());
    }

    /// Property: toSequence(fromSequence(s)) == s
    #[test]
    fn prop_round_trip(v in non_empty_vec_strategy()) {
        let ne = NonEmpty::from_slice(&v).unwrap();
        prop_assert_eq!(ne.as_slice(), v.as_slice());

        let owned = NonEmptyVec::from_vec(v.clone()).unwrap();
        prop_assert_eq!(owned.into_vec(), v);
    }

    /// Property: head/tail match the reference decomposition
    #[test]
    fn prop_head_tail_match_split_first(v in non_empty_vec_strategy()) {
        let ne = NonEmpty::from_slice(&v).unwrap();
        let (expected_head, expected_tail) = v.split_first().unwrap();
        prop_assert_eq!(ne.head(), expected_head);
        prop_assert_eq!(ne.tail(), expected_tail);
        prop_assert_eq!(ne.last(), v.last().unwrap());
        prop_assert_eq!(ne.len().get(), v.len());
    }

    /// Property: pushing never breaks the invariant and head is stable
    #[test]
    fn prop_push_preserves_head(v in non_empty_vec_strategy(), extra in prop::collection::vec(any::<i32>(), 0..8)) {
        let mut ne = NonEmptyVec::from_vec(v.clone()).unwrap();
        for x in &extra {
            ne.push(*x);
        }
        prop_assert_eq!(*ne.head(), v[0]);
        prop_assert_eq!(ne.len().get(), v.len() + extra.len());
    }
}
