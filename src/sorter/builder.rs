//! Reusable sort configuration

use std::cmp::Ordering;
use std::sync::Arc;

use serde_json::Value;

use super::primitive::{MergeSort, StableSort};
use super::{sort_records, validate_subject};
use crate::compare::MultiKeyComparator;
use crate::criteria::{
    Comparator, CompareOutcome, CriteriaNormalizer, InnerCompare, NormalizedCriteria, SortArg,
};
use crate::errors::SortResult;
use crate::options::SortOptions;

/// Builder that accumulates criteria, options, and a sort primitive.
///
/// Arguments are normalized as they are added, so `sort_slice` and the
/// per-pair `compare` reuse one criteria list.
///
/// ```
/// use array_sort::ArraySort;
/// use serde_json::json;
///
/// let subject = json!([{"key": "y"}, {"key": "x"}]);
/// let sorted = ArraySort::new().by("key").sort(Some(&subject)).unwrap();
/// assert_eq!(sorted, vec![json!({"key": "x"}), json!({"key": "y"})]);
/// ```
#[derive(Clone)]
pub struct ArraySort {
    args: Vec<SortArg>,
    normalized: NormalizedCriteria,
    options: Option<SortOptions>,
    primitive: Arc<dyn StableSort + Send + Sync>,
}

impl Default for ArraySort {
    fn default() -> Self {
        Self {
            args: Vec::new(),
            normalized: NormalizedCriteria::default(),
            options: None,
            primitive: Arc::new(MergeSort),
        }
    }
}

impl ArraySort {
    /// Creates an empty configuration (natural order).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dotted property path criterion.
    pub fn by(self, path: &str) -> Self {
        self.arg(path)
    }

    /// Adds a two-argument comparator criterion.
    pub fn by_fn<F, R>(self, f: F) -> Self
    where
        F: Fn(&Value, &Value) -> R + Send + Sync + 'static,
        R: Into<CompareOutcome>,
    {
        self.arg(Comparator::binary(f))
    }

    /// Adds a comparator criterion that receives the inner scalar order.
    pub fn by_delegating<F, R>(self, f: F) -> Self
    where
        F: for<'i> Fn(&Value, &Value, InnerCompare<'i>) -> R + Send + Sync + 'static,
        R: Into<CompareOutcome>,
    {
        self.arg(Comparator::delegating(f))
    }

    /// Adds a raw argument, normalized like any other.
    ///
    /// The whole list is renormalized: a trailing options argument stops
    /// being options once something follows it.
    pub fn arg(mut self, arg: impl Into<SortArg>) -> Self {
        self.args.push(arg.into());
        self.normalized = CriteriaNormalizer::normalize(&self.args);
        self
    }

    /// Overrides the reverse option regardless of the raw arguments.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.options = Some(SortOptions { reverse });
        self
    }

    /// Replaces the stable sort primitive.
    pub fn with_primitive(mut self, primitive: impl StableSort + Send + Sync + 'static) -> Self {
        self.primitive = Arc::new(primitive);
        self
    }

    /// Sorts a subject that may be absent or of the wrong shape.
    pub fn sort(&self, subject: Option<&Value>) -> SortResult<Vec<Value>> {
        match validate_subject(subject)? {
            Some(records) => Ok(self.sort_slice(records)),
            None => Ok(Vec::new()),
        }
    }

    /// Sorts records, returning a new vector.
    pub fn sort_slice(&self, records: &[Value]) -> Vec<Value> {
        sort_records(
            records,
            &self.normalized.criteria,
            self.effective_options(),
            self.primitive.as_ref(),
        )
    }

    /// Compares two records the way `sort_slice` would order them.
    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        MultiKeyComparator::new(&self.normalized.criteria, self.effective_options()).compare(a, b)
    }

    fn effective_options(&self) -> SortOptions {
        self.options.unwrap_or(self.normalized.options)
    }
}

impl std::fmt::Debug for ArraySort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArraySort")
            .field("criteria", &self.normalized.criteria)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
