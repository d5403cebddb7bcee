//! Sort Property Tests
//!
//! Randomized checks of the invariants every sort call must hold:
//! - Output is a permutation of the input
//! - Sorting is idempotent
//! - Reverse keeps fully tied records in original order
//! - Stable primitives agree whenever the criteria form a total order
//! - With partly missing keys every primitive still leaves adjacent records
//!   in non-decreasing order

use std::cmp::Ordering;

use array_sort::compare::natural_order;
use array_sort::{
    sort, sort_with, ArraySort, Comparator, InsertionSort, MergeSort, SortArg, SortOptions,
    StableSort, StdStableSort,
};
use proptest::prelude::*;
use serde_json::{json, Value};

// =============================================================================
// Strategies
// =============================================================================

fn record() -> impl Strategy<Value = (u8, Option<String>)> {
    (0u8..4, proptest::option::of("[a-d]{0,2}"))
}

fn records() -> impl Strategy<Value = Vec<Value>> {
    proptest::collection::vec(record(), 0..80).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(id, (group, name))| match name {
                Some(name) => json!({ "id": id, "group": group, "meta": { "name": name } }),
                None => json!({ "id": id, "group": group }),
            })
            .collect()
    })
}

fn complete_records() -> impl Strategy<Value = Vec<Value>> {
    proptest::collection::vec((0u8..4, "[a-d]{0,2}"), 0..60).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(id, (group, name))| json!({ "id": id, "group": group, "meta": { "name": name } }))
            .collect()
    })
}

fn primitives() -> impl Strategy<Value = Vec<Value>> {
    proptest::collection::vec(
        prop_oneof![
            any::<i32>().prop_map(|n| json!(n)),
            "[a-z]{0,3}".prop_map(|s| json!(s)),
        ],
        0..40,
    )
}

fn ids(records: &[Value]) -> Vec<u64> {
    records.iter().filter_map(|r| r["id"].as_u64()).collect()
}

fn criteria() -> Vec<SortArg> {
    vec![SortArg::from(vec!["group", "doesnt.exist", "meta.name"])]
}

/// Boolean comparator on `meta.name`; ties whenever either side lacks it
fn name_flag() -> Comparator {
    Comparator::binary(|a: &Value, b: &Value| {
        match (a["meta"]["name"].as_str(), b["meta"]["name"].as_str()) {
            (Some(x), Some(y)) => x > y,
            _ => false,
        }
    })
}

fn flag_criteria() -> Vec<SortArg> {
    vec![SortArg::from("group"), SortArg::from(name_flag())]
}

fn sort_using(input: &[Value], args: &[SortArg], primitive: &dyn StableSort) -> Vec<Value> {
    sort_with(Some(&Value::Array(input.to_vec())), args, primitive).unwrap()
}

fn locally_ordered(sorted: &[Value], args: Vec<SortArg>) -> bool {
    let sorter = args
        .into_iter()
        .fold(ArraySort::new(), |sorter, arg| sorter.arg(arg));
    sorted
        .windows(2)
        .all(|pair| sorter.compare(&pair[0], &pair[1]) != Ordering::Greater)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_output_is_permutation(input in records()) {
        let subject = Value::Array(input.clone());
        let sorted = sort(Some(&subject), &criteria()).unwrap();

        let mut before = ids(&input);
        let mut after = ids(&sorted);
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_sort_is_idempotent(input in records()) {
        let once = sort(Some(&Value::Array(input)), &criteria()).unwrap();
        let twice = sort(Some(&Value::Array(once.clone())), &criteria()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_primary_key_non_decreasing(input in records()) {
        let sorted = sort(Some(&Value::Array(input)), &criteria()).unwrap();
        for pair in sorted.windows(2) {
            prop_assert!(pair[0]["group"].as_u64() <= pair[1]["group"].as_u64());
        }
    }

    #[test]
    fn prop_reverse_keeps_ties_in_order(input in records()) {
        let args = vec![SortArg::from("group"), SortArg::from(SortOptions::reversed())];
        let sorted = sort(Some(&Value::Array(input.clone())), &args).unwrap();

        for group in 0..4u64 {
            let original: Vec<u64> = input
                .iter()
                .filter(|r| r["group"].as_u64() == Some(group))
                .filter_map(|r| r["id"].as_u64())
                .collect();
            let reordered: Vec<u64> = sorted
                .iter()
                .filter(|r| r["group"].as_u64() == Some(group))
                .filter_map(|r| r["id"].as_u64())
                .collect();
            prop_assert_eq!(original, reordered);
        }
        for pair in sorted.windows(2) {
            prop_assert!(pair[0]["group"].as_u64() >= pair[1]["group"].as_u64());
        }
    }

    #[test]
    fn prop_primitives_agree_on_total_order(input in complete_records()) {
        for args in [criteria(), flag_criteria()] {
            let merged = sort_using(&input, &args, &MergeSort);
            let inserted = sort_using(&input, &args, &InsertionSort);
            let std_sorted = sort_using(&input, &args, &StdStableSort);
            prop_assert_eq!(&merged, &inserted);
            prop_assert_eq!(&merged, &std_sorted);
        }
    }

    #[test]
    fn prop_missing_keys_stay_locally_ordered(input in records()) {
        for args in [criteria(), flag_criteria()] {
            for primitive in [&MergeSort as &dyn StableSort, &InsertionSort] {
                let sorted = sort_using(&input, &args, primitive);

                let mut before = ids(&input);
                let mut after = ids(&sorted);
                before.sort_unstable();
                after.sort_unstable();
                prop_assert_eq!(before, after);
                prop_assert!(locally_ordered(&sorted, args.clone()));
            }
        }
    }

    #[test]
    fn prop_flag_comparator_idempotent(input in records()) {
        let once = sort(Some(&Value::Array(input)), &flag_criteria()).unwrap();
        let twice = sort(Some(&Value::Array(once.clone())), &flag_criteria()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_natural_order_numbers_first(input in primitives()) {
        let sorted = sort(Some(&Value::Array(input)), &[]).unwrap();
        for pair in sorted.windows(2) {
            prop_assert_ne!(natural_order(&pair[0], &pair[1]), Ordering::Greater);
        }
        let first_string = sorted.iter().position(Value::is_string).unwrap_or(sorted.len());
        prop_assert!(sorted[first_string..].iter().all(Value::is_string));
    }
}
