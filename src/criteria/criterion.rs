//! Normalized sort criteria

use std::fmt;

use serde_json::Value;

use super::comparator::Comparator;
use crate::path;

/// Ordered criteria; the first entry is the primary key
pub type CriteriaList = Vec<Criterion>;

/// A single normalized criterion
#[derive(Debug, Clone)]
pub enum Criterion {
    /// Dotted property path, compared by natural scalar order
    PropertyPath(PropertyPath),
    /// Caller-supplied comparator
    CompareFn(Comparator),
}

/// A property path split into segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath {
    segments: Vec<String>,
}

impl PropertyPath {
    /// Splits a dotted path (`"locals.date"`) into segments.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    /// Returns the path segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolves this path against a record.
    pub fn resolve<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        path::get_segments(record, &self.segments)
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl From<&str> for Criterion {
    fn from(path: &str) -> Self {
        Criterion::PropertyPath(PropertyPath::parse(path))
    }
}

impl From<Comparator> for Criterion {
    fn from(comparator: Comparator) -> Self {
        Criterion::CompareFn(comparator)
    }
}
