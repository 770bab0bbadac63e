//! Serialization keeps capabilities honest: deserializing re-establishes the
//! invariant instead of trusting the input.

use lightcap::{NonEmptyVec, SortedVec};

#[test]
fn non_empty_vec_serializes_as_sequence() {
    let ne = NonEmptyVec::from_vec(vec![1, 2, 3]).unwrap();
    assert_eq!(serde_json::to_string(&ne).unwrap(), "[1,2,3]");
}

#[test]
fn non_empty_vec_rejects_empty_json() {
    let err = serde_json::from_str::<NonEmptyVec<i32>>("[]").unwrap_err();
    assert!(err.to_string().contains("sequence is empty"));
}

#[test]
fn non_empty_vec_accepts_non_empty_json() {
    let ne: NonEmptyVec<i32> = serde_json::from_str("[4, 5]").unwrap();
    assert_eq!(*ne.head(), 4);
}

#[test]
fn sorted_vec_sorts_on_deserialize() {
    let sorted: SortedVec<i32> = serde_json::from_str("[9, -1, 4]").unwrap();
    assert_eq!(sorted.as_slice(), &[-1, 4, 9]);
    assert_eq!(serde_json::to_string(&sorted).unwrap(), "[-1,4,9]");
}
