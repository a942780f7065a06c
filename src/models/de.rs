//! Lenient field parsers for upstream JSON

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// String field that may be null, missing, or a number
pub fn string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => {
            return Err(de::Error::custom(format!("expected string, found {other}")));
        }
    })
}

/// Identifier that may be null or empty; both mean "no reference"
pub fn optional_guid<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = string_or_default(deserializer)?;
    let trimmed = value.trim();
    Ok(if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    })
}

/// Float sent as a number or a numeric string
pub fn f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| de::Error::custom(format!("number {n} is not a float"))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("'{s}' is not a number"))),
        other => Err(de::Error::custom(format!("expected number, found {other}"))),
    }
}

/// Float that defaults to zero when null or blank
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(0.0),
        Some(value) => f64_lenient(value).map_err(de::Error::custom),
    }
}

/// Whole, non-negative float as an integer (`600.0` is 600)
fn integral(f: f64) -> Option<u64> {
    (f.is_finite() && f.fract() == 0.0 && f >= 0.0 && f < u64::MAX as f64).then(|| f as u64)
}

/// Non-negative integer sent as a number or a numeric string
///
/// Whole floats such as `600.0` or `"600.0"` are accepted.
pub fn u64_lenient<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().and_then(integral))
            .ok_or_else(|| de::Error::custom(format!("{n} is not a non-negative integer"))),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(0),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            trimmed
                .parse::<u64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(integral))
                .ok_or_else(|| de::Error::custom(format!("'{s}' is not a non-negative integer")))
        }
        Some(other) => Err(de::Error::custom(format!(
            "expected integer, found {other}"
        ))),
    }
}

/// List of identifiers: strings, objects carrying a `guid`, or null
pub fn guid_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(de::Error::custom(format!("expected array, found {other}")));
        }
    };

    let mut guids = Vec::with_capacity(items.len());
    for item in items {
        let guid = match item {
            Value::String(s) => s,
            Value::Object(ref map) => match map.get("guid") {
                Some(Value::String(s)) => s.clone(),
                _ => return Err(de::Error::custom("equipment entry without a guid")),
            },
            other => {
                return Err(de::Error::custom(format!(
                    "expected identifier, found {other}"
                )));
            }
        };
        if !guid.trim().is_empty() {
            guids.push(guid.trim().to_string());
        }
    }
    Ok(guids)
}

/// Interpret a JSON continuation flag (`true`, `1`, `"true"`)
pub fn lenient_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"),
        _ => false,
    }
}
