use serde_json::Value;

pub const STATUS_KEY: &str = "status";

/// Every value stored under a `"status"` key, in depth-first pre-order.
pub fn collect_statuses(value: &Value) -> Vec<Value> {
    collect_key(value, STATUS_KEY)
}

/// Every value stored under `key` anywhere in `value`, in depth-first
/// pre-order. A matched value is taken whole and not descended into; its
/// siblings are still walked.
pub fn collect_key(value: &Value, key: &str) -> Vec<Value> {
    let mut out = Vec::new();
    // Explicit stack, so document depth never turns into call depth. Children
    // are pushed in reverse to pop in document order.
    let mut stack = vec![Step::Walk(value)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Take(found) => out.push(found.clone()),
            Step::Walk(Value::Object(map)) => {
                for (k, nested) in map.iter().rev() {
                    if k == key {
                        stack.push(Step::Take(nested));
                    } else {
                        stack.push(Step::Walk(nested));
                    }
                }
            }
            Step::Walk(Value::Array(items)) => {
                stack.extend(items.iter().rev().map(Step::Walk));
            }
            Step::Walk(Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null) => {}
        }
    }
    out
}

enum Step<'a> {
    Walk(&'a Value),
    Take(&'a Value),
}
