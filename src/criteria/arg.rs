//! Raw sort arguments as supplied by callers
//!
//! Arguments arrive in any shape: a path string, a comparator, a (possibly
//! nested) list of those, an options value, or arbitrary JSON. The
//! normalizer decides what each one means.

use serde_json::Value;

use super::comparator::Comparator;
use crate::options::SortOptions;

/// One raw argument trailing the subject
#[derive(Debug, Clone)]
pub enum SortArg {
    /// Dotted property path
    Path(String),
    /// Comparator function
    Compare(Comparator),
    /// List of arguments, flattened depth-first
    List(Vec<SortArg>),
    /// Typed options; honored only as the final argument
    Options(SortOptions),
    /// Untyped JSON: strings are paths, arrays are lists, a trailing
    /// object is options, everything else is dropped
    Json(Value),
}

impl From<&str> for SortArg {
    fn from(path: &str) -> Self {
        SortArg::Path(path.to_string())
    }
}

impl From<String> for SortArg {
    fn from(path: String) -> Self {
        SortArg::Path(path)
    }
}

impl From<Comparator> for SortArg {
    fn from(comparator: Comparator) -> Self {
        SortArg::Compare(comparator)
    }
}

impl From<SortOptions> for SortArg {
    fn from(options: SortOptions) -> Self {
        SortArg::Options(options)
    }
}

impl From<Value> for SortArg {
    fn from(value: Value) -> Self {
        SortArg::Json(value)
    }
}

impl<T: Into<SortArg>> From<Vec<T>> for SortArg {
    fn from(items: Vec<T>) -> Self {
        SortArg::List(items.into_iter().map(Into::into).collect())
    }
}
