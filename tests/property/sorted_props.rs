//! Properties of the sortedness capability.

use super::common::{int_vec_strategy, is_ascending, is_permutation, key_strategy};
use lightcap::{SortedSlice, SortedVec};
use proptest::prelude::*;

proptest! {
    /// Property: toList(construct(l)) is a sorted permutation of l
    #[test]
    fn prop_sorted_permutation(v in int_vec_strategy()) {
        let out = SortedVec::from_slice(&v).to_vec();
        prop_assert!(is_ascending(&out));
        prop_assert!(is_permutation(&out, &v));
    }

    /// Property: mutating the constructor's input does not change the container
    #[test]
    fn prop_input_isolated(v in int_vec_strategy(), junk in any::<i32>()) {
        let mut input = v.clone();
        let sorted = SortedVec::from_slice(&input);
        let before = sorted.to_vec();
        for x in input.iter_mut() {
            *x = junk;
        }
        input.push(junk);
        prop_assert_eq!(sorted.to_vec(), before);
    }

    /// Property: mutating a returned copy does not change later reads
    #[test]
    fn prop_output_isolated(v in int_vec_strategy(), junk in any::<i32>()) {
        let sorted = SortedVec::new(v);
        let mut first = sorted.to_vec();
        let expected = first.clone();
        first.reverse();
        first.push(junk);
        prop_assert_eq!(sorted.to_vec(), expected);
    }

    /// Property: SortedSlice accepts exactly the ascending inputs
    #[test]
    fn prop_sorted_slice_accepts_iff_ascending(v in int_vec_strategy()) {
        prop_assert_eq!(SortedSlice::new(&v).is_some(), is_ascending(&v));
    }

    /// Property: the container's search agrees with membership
    #[test]
    fn prop_contains_matches_membership(v in int_vec_strategy(), key in key_strategy()) {
        let sorted = SortedVec::from_slice(&v);
        prop_assert_eq!(sorted.contains(&key), v.contains(&key));
    }
}
