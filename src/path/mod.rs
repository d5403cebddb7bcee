//! Dotted-path value extraction
//!
//! `get(value, "locals.date")` walks object keys segment by segment and
//! returns `None` as soon as a segment is absent. Array elements are
//! addressed by decimal index (`"tags.0"`).
//!
//! Extraction never fails: a missing intermediate, a scalar in the middle
//! of the path, or an out-of-range index all yield `None`.

use serde_json::Value;

/// Resolves a dotted path against a value.
pub fn get<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    get_segments(value, path.split('.'))
}

/// Resolves pre-split path segments against a value.
pub fn get_segments<'a, I, S>(value: &'a Value, segments: I) -> Option<&'a Value>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut current = value;
    for segment in segments {
        current = step(current, segment.as_ref())?;
    }
    Some(current)
}

fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}
