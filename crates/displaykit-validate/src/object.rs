//! JSON text and object predicates.

use serde_json::Value;

/// Checks whether the input parses as JSON.
///
/// The only predicate with an internal fallible step; parse failure is
/// converted into `false`, never surfaced.
pub fn is_json(value: &str) -> bool {
    serde_json::from_str::<Value>(value).is_ok()
}

/// Checks whether a JSON object carries the given keys.
///
/// With `strict`, every key must be present; otherwise any one suffices.
/// Non-object values yield `false`.
pub fn has_keys(value: &Value, keys: &[&str], strict: bool) -> bool {
    let Some(map) = value.as_object() else {
        return false;
    };
    if strict {
        keys.iter().all(|key| map.contains_key(*key))
    } else {
        keys.iter().any(|key| map.contains_key(*key))
    }
}

/// Checks whether a JSON object carries `key` with exactly the expected
/// value.
pub fn is_present(value: &Value, key: &str, expected: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|map| map.get(key) == Some(expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_parse_failures_are_false() {
        assert!(is_json(r#"{"a": 1}"#));
        assert!(is_json("[1, 2, 3]"));
        assert!(is_json("null"));
        assert!(!is_json("{a: 1}"));
        assert!(!is_json("not json"));
    }

    #[test]
    fn has_keys_strict_and_loose() {
        let value = json!({"name": "x", "size": 2});
        assert!(has_keys(&value, &["name", "size"], true));
        assert!(!has_keys(&value, &["name", "color"], true));
        assert!(has_keys(&value, &["name", "color"], false));
        assert!(!has_keys(&json!([1, 2]), &["name"], true));
    }

    #[test]
    fn is_present_compares_values() {
        let value = json!({"state": "open"});
        assert!(is_present(&value, "state", &json!("open")));
        assert!(!is_present(&value, "state", &json!("closed")));
        assert!(!is_present(&value, "missing", &json!("open")));
    }
}
