//! Sorter subsystem
//!
//! Entry points that validate the subject, normalize criteria, compose the
//! comparator, and hand it to a stable sort primitive.
//!
//! # Flow
//!
//! 1. Absent subject (`None` or `null`) returns an empty vector
//! 2. Non-array subject fails with `InvalidArgument`, before any comparison
//! 3. Raw arguments are normalized into criteria and options
//! 4. Records are sorted by reference and cloned into a new vector
//!
//! The subject is never mutated.

mod builder;
mod primitive;

pub use builder::ArraySort;
pub use primitive::{InsertionSort, MergeSort, RecordCompare, StableSort, StdStableSort};

use serde_json::Value;
use tracing::debug;

use crate::compare::MultiKeyComparator;
use crate::criteria::{CriteriaNormalizer, Criterion, NormalizedCriteria, SortArg};
use crate::errors::{SortError, SortResult};
use crate::options::SortOptions;

/// Sorts `subject` by the given raw criteria and options.
///
/// ```
/// use array_sort::{sort, SortArg};
/// use serde_json::json;
///
/// let subject = json!(["d", 3, "b", 1]);
/// let sorted = sort(Some(&subject), &[]).unwrap();
/// assert_eq!(sorted, vec![json!(1), json!(3), json!("b"), json!("d")]);
///
/// let posts = json!([{"date": "2015"}, {"date": "2012"}]);
/// let sorted = sort(Some(&posts), &[SortArg::from("date")]).unwrap();
/// assert_eq!(sorted[0], json!({"date": "2012"}));
/// ```
pub fn sort(subject: Option<&Value>, args: &[SortArg]) -> SortResult<Vec<Value>> {
    sort_with(subject, args, &MergeSort)
}

/// Sorts `subject` using a caller-supplied stable sort primitive.
pub fn sort_with(
    subject: Option<&Value>,
    args: &[SortArg],
    primitive: &dyn StableSort,
) -> SortResult<Vec<Value>> {
    let records = match validate_subject(subject)? {
        Some(records) => records,
        None => return Ok(Vec::new()),
    };

    let NormalizedCriteria { criteria, options } = CriteriaNormalizer::normalize(args);
    Ok(sort_records(records, &criteria, options, primitive))
}

/// Sorts records by already-normalized criteria.
pub fn sort_records(
    records: &[Value],
    criteria: &[Criterion],
    options: SortOptions,
    primitive: &dyn StableSort,
) -> Vec<Value> {
    debug!(
        records = records.len(),
        criteria = criteria.len(),
        reverse = options.reverse,
        "sorting array"
    );

    let comparator = MultiKeyComparator::new(criteria, options);
    let mut refs: Vec<&Value> = records.iter().collect();
    primitive.sort_by(&mut refs, &|a: &Value, b: &Value| comparator.compare(a, b));
    refs.into_iter().cloned().collect()
}

/// Returns the records of a present array subject, `None` for an absent one.
fn validate_subject(subject: Option<&Value>) -> SortResult<Option<&[Value]>> {
    match subject {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(records)) => Ok(Some(records.as_slice())),
        Some(_) => Err(SortError::InvalidArgument),
    }
}
