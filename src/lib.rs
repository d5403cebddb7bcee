//! array-sort - Sort JSON arrays by property paths and comparator functions
//!
//! Criteria are normalized from loosely shaped arguments (path strings,
//! comparators, nested lists, a trailing options object) into an ordered
//! list, composed into one comparator with left-to-right tie-breaking, and
//! applied through a stable sort.
//!
//! ```
//! use array_sort::{sort, SortArg};
//! use serde_json::json;
//!
//! let posts = json!([
//!     {"key": "bbb", "locals": {"date": "2013-05-06"}},
//!     {"key": "aaa", "locals": {"date": "2014-02-02"}},
//!     {"key": "aaa", "locals": {"date": "2012-01-02"}},
//! ]);
//!
//! let sorted = sort(Some(&posts), &[SortArg::from(vec!["key", "locals.date"])]).unwrap();
//! assert_eq!(sorted[0]["locals"]["date"], "2012-01-02");
//! assert_eq!(sorted[2]["key"], "bbb");
//! ```

pub mod compare;
pub mod criteria;
pub mod errors;
pub mod options;
pub mod path;
pub mod sorter;

pub use criteria::{
    Comparator, CompareOutcome, CriteriaList, CriteriaNormalizer, Criterion, InnerCompare,
    NormalizedCriteria, PropertyPath, SortArg,
};
pub use errors::{SortError, SortResult};
pub use options::SortOptions;
pub use sorter::{
    sort, sort_records, sort_with, ArraySort, InsertionSort, MergeSort, StableSort, StdStableSort,
};
