//! # Sort Options
//!
//! Options that travel alongside the criteria. Deserializable from JSON so
//! they can be loaded from configuration; unknown keys are ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Options applied to the composed comparator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortOptions {
    /// Invert every decisive comparison
    pub reverse: bool,
}

impl SortOptions {
    /// Options with `reverse` enabled
    pub fn reversed() -> Self {
        Self { reverse: true }
    }

    /// Reads options from a trailing plain-object argument.
    ///
    /// `reverse` is enabled only by the boolean `true`.
    pub fn from_object(map: &Map<String, Value>) -> Self {
        Self {
            reverse: matches!(map.get("reverse"), Some(Value::Bool(true))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_default_not_reversed() {
        assert!(!SortOptions::default().reverse);
    }

    #[test]
    fn test_from_object_reverse_true() {
        let opts = SortOptions::from_object(&object(json!({"reverse": true})));
        assert_eq!(opts, SortOptions::reversed());
    }

    #[test]
    fn test_from_object_requires_boolean_true() {
        assert!(!SortOptions::from_object(&object(json!({"reverse": "yes"}))).reverse);
        assert!(!SortOptions::from_object(&object(json!({"reverse": 1}))).reverse);
        assert!(!SortOptions::from_object(&object(json!({}))).reverse);
    }

    #[test]
    fn test_deserialize_from_config() {
        let opts: SortOptions = serde_json::from_str(r#"{"reverse": true, "extra": 1}"#).unwrap();
        assert!(opts.reverse);

        let opts: SortOptions = serde_json::from_str("{}").unwrap();
        assert!(!opts.reverse);
    }
}
