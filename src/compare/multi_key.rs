//! Multi-key comparator composition
//!
//! Criteria are evaluated in list order and the first decisive one wins.
//! Reverse flips only the decisive result, so records tied on every
//! criterion keep their relative order.

use std::cmp::Ordering;

use serde_json::Value;

use super::natural::{natural_order, scalar_order};
use crate::criteria::{Criterion, PropertyPath};
use crate::options::SortOptions;

/// Composes a criteria list into a single comparator
#[derive(Debug, Clone, Copy)]
pub struct MultiKeyComparator<'c> {
    criteria: &'c [Criterion],
    reverse: bool,
}

impl<'c> MultiKeyComparator<'c> {
    /// Creates a comparator over the given criteria.
    ///
    /// An empty list falls back to the natural order of the records.
    pub fn new(criteria: &'c [Criterion], options: SortOptions) -> Self {
        Self {
            criteria,
            reverse: options.reverse,
        }
    }

    /// Compares two records.
    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        let ordering = if self.criteria.is_empty() {
            natural_order(a, b)
        } else {
            self.compare_criteria(a, b)
        };

        if self.reverse {
            ordering.reverse()
        } else {
            ordering
        }
    }

    fn compare_criteria(&self, a: &Value, b: &Value) -> Ordering {
        for criterion in self.criteria {
            let ordering = match criterion {
                Criterion::PropertyPath(path) => Self::compare_path(path, a, b),
                Criterion::CompareFn(comparator) => comparator.compare(a, b),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    fn compare_path(path: &PropertyPath, a: &Value, b: &Value) -> Ordering {
        scalar_order(path.resolve(a), path.resolve(b)).unwrap_or(Ordering::Equal)
    }
}
