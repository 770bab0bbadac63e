//! Scope creation and the overflow guard.

use lightcap::bounded::{with_len, with_slice, MAX_SCOPE_LEN};
use lightcap::CapabilityReport;

#[test]
#[should_panic(expected = "Contract violation")]
fn scope_at_half_max_plus_one_is_fatal() {
    // len - 1 == usize::MAX / 2: the first length that violates the guard.
    with_len(MAX_SCOPE_LEN + 1, |_| ());
}

#[test]
fn scope_at_max_is_allowed() {
    assert_eq!(with_len(MAX_SCOPE_LEN, |scope| scope.len()), MAX_SCOPE_LEN);
}

#[test]
fn empty_slice_scope_has_no_indices() {
    let empty: [u8; 0] = [];
    let count = with_slice(&empty, |arr| arr.scope().indices().count());
    assert_eq!(count, 0);
}

#[test]
fn manual_search_loop_with_scope_operations() {
    // The binary search written out by hand against the public scope API.
    let data = [2, 4, 6, 8, 10];
    let key = 8;
    let found = with_slice(&data, |arr| {
        let scope = arr.scope();
        let (mut lo, mut hi) = (scope.init_lo(), scope.init_hi());
        loop {
            let next = scope.cmp(
                lo,
                hi,
                || Err(None),
                |l, h| {
                    let m = scope.middle(l, h);
                    match key.cmp(arr.get(m)) {
                        std::cmp::Ordering::Less => Ok((lo, scope.pred(m))),
                        std::cmp::Ordering::Equal => Err(Some(m.get())),
                        std::cmp::Ordering::Greater => Ok((scope.succ(m), hi)),
                    }
                },
            );
            match next {
                Ok((l, h)) => {
                    lo = l;
                    hi = h;
                }
                Err(result) => break result,
            }
        }
    });
    assert_eq!(found, Some(3));
}

#[test]
fn report_lists_kernel_files() {
    let report = CapabilityReport::generate();
    assert!(report
        .kernel_files
        .iter()
        .all(|f| f.starts_with("src/kernel/")));
}
