//! Criteria normalization
//!
//! Flattens raw arguments into an ordered `CriteriaList` and extracts the
//! trailing options. Encounter order is left to right, depth first.

use serde_json::Value;
use tracing::trace;

use super::arg::SortArg;
use super::criterion::{CriteriaList, Criterion, PropertyPath};
use crate::options::SortOptions;

/// Criteria and options extracted from raw arguments
#[derive(Debug, Clone, Default)]
pub struct NormalizedCriteria {
    /// Criteria in precedence order
    pub criteria: CriteriaList,
    /// Options taken from the final argument, or defaults
    pub options: SortOptions,
}

/// Normalizes raw sort arguments
pub struct CriteriaNormalizer;

impl CriteriaNormalizer {
    /// Normalizes a raw argument list.
    ///
    /// Only the final argument is inspected for options. Anything that is
    /// neither a path, a comparator, nor a list is dropped.
    pub fn normalize(args: &[SortArg]) -> NormalizedCriteria {
        let mut normalized = NormalizedCriteria::default();
        let last = args.len().checked_sub(1);

        for (index, arg) in args.iter().enumerate() {
            let terminal = Some(index) == last;
            match arg {
                SortArg::Options(options) if terminal => normalized.options = *options,
                SortArg::Json(Value::Object(map)) if terminal => {
                    normalized.options = SortOptions::from_object(map)
                }
                _ => Self::flatten(arg, &mut normalized.criteria),
            }
        }

        normalized
    }

    fn flatten(arg: &SortArg, out: &mut CriteriaList) {
        match arg {
            SortArg::Path(path) => out.push(Criterion::PropertyPath(PropertyPath::parse(path))),
            SortArg::Compare(comparator) => out.push(Criterion::CompareFn(comparator.clone())),
            SortArg::List(items) => {
                for item in items {
                    Self::flatten(item, out);
                }
            }
            SortArg::Options(_) => trace!("dropping non-terminal sort options"),
            SortArg::Json(value) => Self::flatten_json(value, out),
        }
    }

    fn flatten_json(value: &Value, out: &mut CriteriaList) {
        match value {
            Value::String(path) => out.push(Criterion::PropertyPath(PropertyPath::parse(path))),
            Value::Array(items) => {
                for item in items {
                    Self::flatten_json(item, out);
                }
            }
            other => trace!(argument = %other, "dropping malformed sort criterion"),
        }
    }
}
