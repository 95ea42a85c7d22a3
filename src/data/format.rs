//! Null-safe display formatting. Every helper falls back to the placeholder
//! instead of failing when the backend omitted a value.

use chrono::{DateTime, Local, NaiveDateTime};
use itertools::Itertools;
use serde_json::Value;

use crate::config::PLACEHOLDER;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

pub fn text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn fixed(value: Option<f64>, decimals: usize) -> String {
    finite(value).map_or_else(|| PLACEHOLDER.to_string(), |v| format!("{v:.decimals$}"))
}

pub fn percent(value: Option<f64>, decimals: usize) -> String {
    finite(value).map_or_else(|| PLACEHOLDER.to_string(), |v| format!("{v:.decimals$}%"))
}

/// Thousands-separated number, e.g. `1,234,567.89`.
pub fn grouped(value: Option<f64>, decimals: usize) -> String {
    let Some(v) = finite(value) else {
        return PLACEHOLDER.to_string();
    };

    let formatted = format!("{:.*}", decimals, v.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };
    let negative = v < 0.0 && formatted.chars().any(|c| matches!(c, '1'..='9'));
    let sign = if negative { "-" } else { "" };

    match frac_part {
        Some(frac) => format!("{sign}{}.{frac}", group_digits(int_part)),
        None => format!("{sign}{}", group_digits(int_part)),
    }
}

/// Currency-prefixed grouped number, e.g. `₩98,000`.
pub fn money(symbol: &str, value: Option<f64>, decimals: usize) -> String {
    match finite(value) {
        Some(_) => format!("{symbol}{}", grouped(value, decimals)),
        None => PLACEHOLDER.to_string(),
    }
}

fn group_digits(digits: &str) -> String {
    let reversed: Vec<char> = digits.chars().rev().collect();
    reversed
        .chunks(3)
        .map(|chunk| chunk.iter().collect::<String>())
        .join(",")
        .chars()
        .rev()
        .collect()
}

/// Renders an RFC 3339 (or naive ISO) timestamp in local time; anything else
/// is shown as received.
pub fn timestamp(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|s| !s.is_empty()) else {
        return PLACEHOLDER.to_string();
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(TIMESTAMP_FORMAT).to_string();
    }
    raw.to_string()
}

/// Free-form metric value as sent by the backend.
pub fn metric(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => text(Some(s)),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => grouped(Some(i as f64), 0),
            None => grouped(n.as_f64(), 2),
        },
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Array(items)) => items.iter().map(|item| metric(Some(item))).join(", "),
        Some(Value::Object(_)) | Some(Value::Null) | None => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_values_render_placeholder() {
        assert_eq!(fixed(None, 2), "N/A");
        assert_eq!(percent(None, 1), "N/A");
        assert_eq!(grouped(None, 0), "N/A");
        assert_eq!(money("$", None, 2), "N/A");
        assert_eq!(text(None), "N/A");
        assert_eq!(text(Some("  ")), "N/A");
        assert_eq!(timestamp(None), "N/A");
        assert_eq!(fixed(Some(f64::NAN), 2), "N/A");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(grouped(Some(1_234_567.891), 2), "1,234,567.89");
        assert_eq!(grouped(Some(999.0), 0), "999");
        assert_eq!(grouped(Some(1000.0), 0), "1,000");
        assert_eq!(grouped(Some(-98_765.4), 1), "-98,765.4");
        assert_eq!(grouped(Some(-0.001), 0), "0");
        assert_eq!(money("₩", Some(98_000.0), 0), "₩98,000");
    }

    #[test]
    fn fixed_and_percent_round() {
        assert_eq!(fixed(Some(2345.678), 2), "2345.68");
        assert_eq!(percent(Some(3.14159), 2), "3.14%");
    }

    #[test]
    fn unparseable_timestamp_is_shown_raw() {
        assert_eq!(timestamp(Some("yesterday")), "yesterday");
        assert_eq!(timestamp(Some("2025-01-28T12:00:00.123")), "2025-01-28 12:00:00");
        assert_ne!(timestamp(Some("2025-01-28T12:00:00Z")), "N/A");
    }

    #[test]
    fn metric_values() {
        assert_eq!(metric(Some(&json!("rising"))), "rising");
        assert_eq!(metric(Some(&json!(1_000_000))), "1,000,000");
        assert_eq!(metric(Some(&json!(1.5))), "1.50");
        assert_eq!(metric(Some(&json!(null))), "N/A");
        assert_eq!(metric(None), "N/A");
    }
}
