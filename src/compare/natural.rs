//! Natural ordering of JSON values
//!
//! Ordering rules:
//! - null < bool < number < string < array < object
//! - numbers compare numerically, exactly whenever one side is an integer
//! - strings compare by UTF-16 code unit
//! - arrays and objects are not compared with each other (equal)

use std::cmp::Ordering;

use serde_json::{Number, Value};

/// Total natural order over any two values.
pub fn natural_order(a: &Value, b: &Value) -> Ordering {
    let a_rank = type_rank(a);
    let b_rank = type_rank(b);
    if a_rank != b_rank {
        return a_rank.cmp(&b_rank);
    }

    match (a, b) {
        (Value::Bool(a_b), Value::Bool(b_b)) => a_b.cmp(b_b),
        (Value::Number(a_n), Value::Number(b_n)) => compare_numbers(a_n, b_n),
        (Value::String(a_s), Value::String(b_s)) => compare_strings(a_s, b_s),
        _ => Ordering::Equal,
    }
}

/// Orders two resolved values when both are scalars.
///
/// Returns `None` when either side is absent, null, or a container, so
/// the caller can treat the pair as carrying no ordering signal.
pub fn scalar_order(a: Option<&Value>, b: Option<&Value>) -> Option<Ordering> {
    match (a, b) {
        (Some(a), Some(b)) if is_scalar(a) && is_scalar(b) => Some(natural_order(a, b)),
        _ => None,
    }
}

/// Scalar order with non-scalar pairs tied.
///
/// Handed to delegating comparators as their inner compare.
pub fn inner_compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    scalar_order(a, b).unwrap_or(Ordering::Equal)
}

/// Returns true for values that carry an ordering of their own
pub fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::Bool(_) | Value::Number(_) | Value::String(_))
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    match (exact_integer(a), exact_integer(b)) {
        (Some(a_i), Some(b_i)) => a_i.cmp(&b_i),
        (Some(a_i), None) => compare_integer_float(a_i, b.as_f64().unwrap_or(0.0)),
        (None, Some(b_i)) => compare_integer_float(b_i, a.as_f64().unwrap_or(0.0)).reverse(),
        (None, None) => {
            let a_f = a.as_f64().unwrap_or(0.0);
            let b_f = b.as_f64().unwrap_or(0.0);
            a_f.partial_cmp(&b_f).unwrap_or(Ordering::Equal)
        }
    }
}

fn exact_integer(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

/// Compares an integer with a float without rounding the integer.
fn compare_integer_float(int: i128, float: f64) -> Ordering {
    if float.is_nan() {
        return Ordering::Equal;
    }
    // Saturating cast; every i64/u64 lies strictly inside i128
    let whole = float.trunc();
    match int.cmp(&(whole as i128)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)).unwrap_or(Ordering::Equal),
        ordering => ordering,
    }
}

fn compare_strings(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}
