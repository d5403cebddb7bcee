//! Criteria subsystem
//!
//! Turns arbitrarily shaped caller arguments into a closed set of
//! criterion variants:
//!
//! - `Criterion::PropertyPath`: dotted path compared by natural order
//! - `Criterion::CompareFn`: caller comparator, binary or delegating
//!
//! # Precedence
//!
//! Criteria keep left-to-right, depth-first encounter order. The first
//! criterion is the primary key; later ones only break ties.

mod arg;
mod comparator;
mod criterion;
mod normalizer;

pub use arg::SortArg;
pub use comparator::{Comparator, CompareOutcome, InnerCompare};
pub use criterion::{CriteriaList, Criterion, PropertyPath};
pub use normalizer::{CriteriaNormalizer, NormalizedCriteria};
