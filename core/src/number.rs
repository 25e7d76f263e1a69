//! Numeric identity and order for JSON numbers kept in their source spelling.

use serde_json::Number;
use std::cmp::Ordering;

/// One spelling per numeric value: `1`, `1.0`, `1e0` and `-0` all map to the
/// same text as their integer form. Integers of any size stay exact.
pub fn canonical_number_text(n: &Number) -> String {
    let text = n.to_string();
    if let Some(int) = split_integer(&text) {
        return int.to_string();
    }
    match n.as_f64() {
        Some(x) if x == 0.0 => "0".to_string(),
        // Exact decimal expansion of an integral f64.
        Some(x) if x.is_finite() && x.fract() == 0.0 => format!("{:.0}", x),
        Some(x) => format!("{:e}", x),
        None => text,
    }
}

/// Numeric order. Integral values compare exactly whatever their size; anything
/// with a fractional part compares as f64, with the canonical text as a
/// tie-break so the result never depends on input order.
pub fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    let (ca, cb) = (canonical_number_text(a), canonical_number_text(b));
    if let (Some(x), Some(y)) = (split_integer(&ca), split_integer(&cb)) {
        return x.cmp(&y);
    }
    let by_value = match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    };
    by_value.then_with(|| ca.cmp(&cb))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Integer<'a> {
    negative: bool,
    digits: &'a str,
}

fn split_integer(text: &str) -> Option<Integer<'_>> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = match digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    Some(Integer {
        negative: negative && digits != "0",
        digits,
    })
}

impl Ord for Integer<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        let magnitude = self
            .digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(other.digits));
        match (self.negative, other.negative) {
            (false, false) => magnitude,
            (true, true) => magnitude.reverse(),
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
        }
    }
}

impl PartialOrd for Integer<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Integer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(self.digits)
    }
}
