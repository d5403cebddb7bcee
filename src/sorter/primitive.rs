//! Stable sort primitives
//!
//! The sorter never calls a sort algorithm directly; it hands a slice of
//! record references and a comparator to a `StableSort`.
//!
//! Criteria that tie on missing values are not transitive, so the default
//! primitive must tolerate comparators that are not a total order.
//! `MergeSort` and `InsertionSort` do; `StdStableSort` may panic on them
//! and is opt-in.

use std::cmp::Ordering;

use serde_json::Value;

/// Comparator handed to a sort primitive
pub type RecordCompare<'a> = &'a dyn Fn(&Value, &Value) -> Ordering;

/// A stable sort over record references.
///
/// Implementations must keep records that compare equal in their original
/// relative order.
pub trait StableSort {
    /// Sorts `records` in place by `compare`.
    fn sort_by(&self, records: &mut [&Value], compare: RecordCompare<'_>);
}

/// Inputs at or below this length are insertion sorted
const INSERTION_THRESHOLD: usize = 16;

/// Standard library stable slice sort.
///
/// Panics if `compare` is not a total order (Rust 1.81+).
#[derive(Debug, Clone, Copy, Default)]
pub struct StdStableSort;

impl StableSort for StdStableSort {
    fn sort_by(&self, records: &mut [&Value], compare: RecordCompare<'_>) {
        records.sort_by(|a, b| compare(*a, *b));
    }
}

/// Insertion sort; quadratic but trivially stable
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl StableSort for InsertionSort {
    fn sort_by(&self, records: &mut [&Value], compare: RecordCompare<'_>) {
        for i in 1..records.len() {
            let mut j = i;
            while j > 0 && compare(records[j - 1], records[j]) == Ordering::Greater {
                records.swap(j - 1, j);
                j -= 1;
            }
        }
    }
}

/// Top-down merge sort with an insertion sort base case.
///
/// Never panics on an inconsistent comparator. For an antisymmetric
/// comparator, which the composed criteria comparator always is, every
/// adjacent pair of the output compares non-greater, so sorting the output
/// again is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl StableSort for MergeSort {
    fn sort_by(&self, records: &mut [&Value], compare: RecordCompare<'_>) {
        let mut scratch = Vec::with_capacity(records.len());
        merge_sort(records, &mut scratch, compare);
    }
}

fn merge_sort<'v>(
    records: &mut [&'v Value],
    scratch: &mut Vec<&'v Value>,
    compare: RecordCompare<'_>,
) {
    if records.len() <= INSERTION_THRESHOLD {
        InsertionSort.sort_by(records, compare);
        return;
    }

    let mid = records.len() / 2;
    merge_sort(&mut records[..mid], scratch, compare);
    merge_sort(&mut records[mid..], scratch, compare);

    // Already in order across the split
    if compare(records[mid - 1], records[mid]) != Ordering::Greater {
        return;
    }

    scratch.clear();
    let (mut i, mut j) = (0, mid);
    while i < mid && j < records.len() {
        // Right side wins only when strictly less, keeping ties stable
        if compare(records[i], records[j]) == Ordering::Greater {
            scratch.push(records[j]);
            j += 1;
        } else {
            scratch.push(records[i]);
            i += 1;
        }
    }
    scratch.extend_from_slice(&records[i..mid]);
    scratch.extend_from_slice(&records[j..]);
    records.copy_from_slice(scratch.as_slice());
}
