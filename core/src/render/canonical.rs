use crate::number::canonical_number_text;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Compact JSON text with object keys sorted at every level and numbers in one
/// spelling per value. Two values are structurally equal, with numbers compared
/// by value, exactly when their canonical texts are equal.
pub fn canonical_text(value: &Value) -> String {
    normalize_value(value).to_string()
}

fn normalize_value(v: &Value) -> Value {
    match v {
        Value::Object(map) => {
            let sorted: BTreeMap<&String, Value> =
                map.iter().map(|(k, vv)| (k, normalize_value(vv))).collect();
            // Map keeps insertion order under preserve_order; rebuild sorted.
            let mut out = Map::with_capacity(sorted.len());
            for (k, vv) in sorted {
                out.insert(k.clone(), vv);
            }
            Value::Object(out)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(normalize_value).collect()),
        Value::Number(n) => {
            let text = canonical_number_text(n);
            Value::Number(text.parse::<Number>().unwrap_or_else(|_| n.clone()))
        }
        other => other.clone(),
    }
}
