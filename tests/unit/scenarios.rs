//! Concrete end-to-end scenarios.

use super::common::sorted_fixture;
use lightcap::{search, search_by, NonEmpty, NonEmptyVec, SortedSlice, SortedVec};

fn compare_ints(a: &i64, b: &i64) -> std::cmp::Ordering {
    a.cmp(b)
}

#[test]
fn search_finds_seven_at_three() {
    let xs: [i64; 6] = [1, 3, 5, 7, 9, 11];
    assert_eq!(search_by(&xs, &7, compare_ints), Some((3, &7)));
}

#[test]
fn search_misses_four() {
    let xs: [i64; 6] = [1, 3, 5, 7, 9, 11];
    assert_eq!(search_by(&xs, &4, compare_ints), None);
}

#[test]
fn construct_then_to_list() {
    assert_eq!(SortedVec::new(vec![3, 1, 2]).to_vec(), vec![1, 2, 3]);
}

#[test]
fn empty_search_returns_none() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(search(&empty, &0), None);
}

#[test]
fn fixture_through_every_capability() {
    let xs = sorted_fixture();

    let ne = NonEmpty::from_slice(&xs).unwrap();
    assert_eq!(*ne.head(), 1);
    assert_eq!(ne.tail(), &[3, 5, 7, 9, 11]);

    let sorted = SortedSlice::new(&xs).unwrap();
    assert_eq!(sorted.search(&9), Some((4, &9)));

    let owned = SortedVec::from_slice(&xs);
    assert_eq!(owned.as_slice(), xs.as_slice());
}

#[test]
fn non_empty_of_sorted_output() {
    let sorted = SortedVec::new(vec![8, 2, 5]);
    let ne = NonEmpty::from_slice(sorted.as_slice()).unwrap();
    assert_eq!(*ne.head(), 2);
    assert_eq!(*ne.last(), 8);
}

#[test]
fn strings_search_by_borrowed_key() {
    let names: SortedVec<String> = ["mallory", "alice", "carol", "bob"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let found = search_by(names.as_slice(), "carol", |k, x: &String| k.cmp(x.as_str()));
    assert_eq!(found.map(|(i, _)| i), Some(2));
}

#[test]
fn non_empty_vec_from_head_and_tail() {
    let ne = NonEmptyVec::from_head_and_tail("first", ["second", "third"]);
    assert_eq!(*ne.head(), "first");
    assert_eq!(ne.as_nonempty().tail(), &["second", "third"]);
}
