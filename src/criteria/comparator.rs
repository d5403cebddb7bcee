//! Caller-supplied comparator functions
//!
//! Two capabilities exist:
//! - `Binary`: `(a, b) -> outcome`
//! - `Delegating`: `(a, b, inner) -> outcome`, where `inner` is the natural
//!   scalar order, so a criterion can extract its own values and hand the
//!   final ordering back
//!
//! Every invocation is normalized into an `Ordering` right at the call.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::compare::inner_compare;

/// Scalar comparator handed to delegating criteria
pub type InnerCompare<'a> = &'a dyn Fn(Option<&Value>, Option<&Value>) -> Ordering;

type BinaryFn = dyn Fn(&Value, &Value) -> CompareOutcome + Send + Sync;
type DelegatingFn = dyn for<'i> Fn(&Value, &Value, InnerCompare<'i>) -> CompareOutcome + Send + Sync;

/// Raw result of a comparator invocation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompareOutcome {
    /// Already a three-way ordering
    Ordered(Ordering),
    /// Signed number: positive means `a` after `b`
    Signed(f64),
    /// Boolean convention: `true` means `a` after `b`
    Flag(bool),
}

impl From<Ordering> for CompareOutcome {
    fn from(ordering: Ordering) -> Self {
        CompareOutcome::Ordered(ordering)
    }
}

impl From<bool> for CompareOutcome {
    fn from(flag: bool) -> Self {
        CompareOutcome::Flag(flag)
    }
}

impl From<f64> for CompareOutcome {
    fn from(n: f64) -> Self {
        CompareOutcome::Signed(n)
    }
}

impl From<i32> for CompareOutcome {
    fn from(n: i32) -> Self {
        CompareOutcome::Ordered(n.cmp(&0))
    }
}

impl From<i64> for CompareOutcome {
    fn from(n: i64) -> Self {
        CompareOutcome::Ordered(n.cmp(&0))
    }
}

/// A comparator criterion
#[derive(Clone)]
pub enum Comparator {
    /// Two-argument comparator
    Binary(Arc<BinaryFn>),
    /// Three-argument comparator receiving the inner scalar order
    Delegating(Arc<DelegatingFn>),
}

impl Comparator {
    /// Wraps a two-argument comparator.
    pub fn binary<F, R>(f: F) -> Self
    where
        F: Fn(&Value, &Value) -> R + Send + Sync + 'static,
        R: Into<CompareOutcome>,
    {
        Comparator::Binary(Arc::new(move |a: &Value, b: &Value| -> CompareOutcome {
            f(a, b).into()
        }))
    }

    /// Wraps a three-argument comparator.
    pub fn delegating<F, R>(f: F) -> Self
    where
        F: for<'i> Fn(&Value, &Value, InnerCompare<'i>) -> R + Send + Sync + 'static,
        R: Into<CompareOutcome>,
    {
        Comparator::Delegating(Arc::new(
            move |a: &Value,
                  b: &Value,
                  inner: &dyn Fn(Option<&Value>, Option<&Value>) -> Ordering|
                  -> CompareOutcome { f(a, b, inner).into() },
        ))
    }

    fn invoke(&self, a: &Value, b: &Value) -> CompareOutcome {
        match self {
            Comparator::Binary(f) => f(a, b),
            Comparator::Delegating(f) => f(a, b, &inner_compare),
        }
    }

    /// Compares two records, normalizing the outcome.
    ///
    /// A `false` flag is ambiguous between "before" and "tied", so the
    /// comparator is probed once with swapped arguments.
    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        match self.invoke(a, b) {
            CompareOutcome::Ordered(ordering) => ordering,
            CompareOutcome::Signed(n) => n.partial_cmp(&0.0).unwrap_or(Ordering::Equal),
            CompareOutcome::Flag(true) => Ordering::Greater,
            CompareOutcome::Flag(false) => match self.invoke(b, a) {
                CompareOutcome::Flag(true) => Ordering::Less,
                _ => Ordering::Equal,
            },
        }
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Binary(_) => write!(f, "Comparator::Binary(..)"),
            Comparator::Delegating(_) => write!(f, "Comparator::Delegating(..)"),
        }
    }
}
