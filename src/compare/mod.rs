//! Comparison subsystem
//!
//! - `natural`: the default total order over JSON values and the scalar
//!   order used for property paths
//! - `multi_key`: composition of a criteria list into one comparator

mod multi_key;
mod natural;

pub use multi_key::MultiKeyComparator;
pub use natural::{inner_compare, is_scalar, natural_order, scalar_order};
