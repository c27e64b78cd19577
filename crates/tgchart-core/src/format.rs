// File: crates/tgchart-core/src/format.rs
// Summary: Value and date label formatting (thousands suffixes, month/day strings).

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

const SUFFIXES: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Format an axis or tooltip value: `950`, `1.2K`, `3M`, `-12.5K`.
pub fn format_value(v: f64) -> String {
    if !v.is_finite() {
        return String::from("-");
    }
    let abs = v.abs();
    for (unit, suffix) in SUFFIXES {
        if abs >= unit {
            return format!("{}{}", trim_decimals(v / unit, 1), suffix);
        }
    }
    trim_decimals(v, 2)
}

/// Fixed-precision formatting with trailing zeros (and a dangling dot) removed.
fn trim_decimals(v: f64, digits: usize) -> String {
    let s = format!("{:.*}", digits, v);
    let s = if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.') } else { s.as_str() };
    if s == "-0" { String::from("0") } else { s.to_string() }
}

/// Short date label used under the X axis, e.g. `Jan 5`.
pub fn format_axis_date(d: NaiveDate) -> String {
    d.format("%b %-d").to_string()
}

/// Longer date label used in tooltips, e.g. `Sun, Jan 5`.
pub fn format_tooltip_date(d: NaiveDate) -> String {
    d.format("%a, %b %-d").to_string()
}

/// Interpret a millisecond UNIX timestamp as a UTC calendar date.
pub fn date_from_millis(ms: i64) -> Option<NaiveDate> {
    match Utc.timestamp_millis_opt(ms) {
        chrono::LocalResult::Single(d) => Some(d.date_naive()),
        chrono::LocalResult::Ambiguous(d, _) => Some(d.date_naive()),
        chrono::LocalResult::None => None,
    }
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    DateTime::parse_from_rfc3339(s).ok().map(|d| d.with_timezone(&Utc).date_naive())
}
