// ABOUTME: Shared formatting and lenient decoding helpers
// ABOUTME: The analytics service is loose about numeric types, so decoding tolerates strings and nulls

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Format an integer with thousands separators (`1234567` -> `1,234,567`)
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a ratio with a fixed number of decimals
pub fn format_ratio(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Decode a non-negative count that may arrive as a number, a numeric string, or null
pub fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().replace(',', "").parse::<u64>().unwrap_or(0),
        _ => 0,
    })
}

/// Decode a non-negative float that may arrive as a number, a numeric string, or null
pub fn lenient_float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// Decode an optional display label that may arrive as a string or a number
pub fn lenient_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
