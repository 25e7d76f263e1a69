use crate::error::{ScanError, ScanResult};
use crate::number::compare_numbers;
use crate::render::canonical::canonical_text;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl StatusKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => StatusKind::Null,
            Value::Bool(_) => StatusKind::Bool,
            Value::Number(_) => StatusKind::Number,
            Value::String(_) => StatusKind::String,
            Value::Array(_) => StatusKind::Array,
            Value::Object(_) => StatusKind::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusKind::Null => "null",
            StatusKind::Bool => "boolean",
            StatusKind::Number => "number",
            StatusKind::String => "string",
            StatusKind::Array => "array",
            StatusKind::Object => "object",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Drop structurally equal duplicates, keeping the first occurrence.
/// Objects compare equal regardless of key order and numbers by value, so `1`
/// and `1.0` collapse.
pub fn dedup_statuses(values: Vec<Value>) -> Vec<Value> {
    let mut seen: HashSet<String> = HashSet::with_capacity(values.len());
    let mut out = Vec::with_capacity(values.len());
    for v in values {
        if seen.insert(canonical_text(&v)) {
            out.push(v);
        }
    }
    out
}

/// Sort ascending. Only homogeneous strings, numbers or booleans have an
/// order; a single value of any kind is trivially sorted. Everything else is
/// an `Ordering` error.
pub fn sort_statuses(mut values: Vec<Value>) -> ScanResult<Vec<Value>> {
    if values.len() < 2 {
        return Ok(values);
    }

    let kind = StatusKind::of(&values[0]);
    if let Some(other) = values.iter().map(StatusKind::of).find(|k| *k != kind) {
        return Err(ScanError::Ordering {
            left: kind,
            right: other,
        });
    }

    match kind {
        StatusKind::String => values.sort_by(|a, b| a.as_str().cmp(&b.as_str())),
        StatusKind::Number => values.sort_by(compare_number_values),
        StatusKind::Bool => values.sort_by_key(|v| v.as_bool()),
        StatusKind::Null | StatusKind::Array | StatusKind::Object => {
            return Err(ScanError::Ordering {
                left: kind,
                right: kind,
            });
        }
    }
    Ok(values)
}

pub fn unique_sorted_statuses(values: Vec<Value>) -> ScanResult<Vec<Value>> {
    let collected = values.len();
    let unique = dedup_statuses(values);
    log::debug!("{} status values, {} unique", collected, unique.len());
    sort_statuses(unique)
}

fn compare_number_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y),
        _ => Ordering::Equal,
    }
}
