//! Field deserializers for upstream logs with inconsistent shapes.
//!
//! Every helper accepts any JSON value and degrades to a default instead of
//! failing the surrounding record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional field, dropping it when the shape does not match
pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Truthiness of a loosely typed flag: `true`, non-zero numbers and
/// non-empty strings count, everything else is false
pub fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

/// Only a literal JSON `true` counts
pub fn strict_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value == Value::Bool(true))
}

/// Number or numeric string; anything else is treated as absent
pub fn number_like<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value))
}

/// Tally field (`makes`, `attempts`): an absent or `null` field stays
/// `None`, a present value that does not coerce counts as 0
pub fn count<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(Some(coerce_number(&value).unwrap_or(0.0)))
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub(crate) fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                // Number("") is 0 upstream
                return Some(0.0);
            }
            trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("yes")));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(null)));
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(5)), Some(5.0));
        assert_eq!(coerce_number(&json!("4")), Some(4.0));
        assert_eq!(coerce_number(&json!(" 2.5 ")), Some(2.5));
        assert_eq!(coerce_number(&json!("")), Some(0.0));
        assert_eq!(coerce_number(&json!("abc")), None);
        assert_eq!(coerce_number(&json!(null)), None);
        assert_eq!(coerce_number(&json!([1])), None);
    }

    #[derive(Debug, Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "optional")]
        zone: Option<String>,
        #[serde(default, deserialize_with = "strict_true")]
        flag: bool,
        #[serde(default, deserialize_with = "count")]
        attempts: Option<f64>,
    }

    #[test]
    fn test_optional_drops_mismatched_shapes() {
        let record: Record = serde_json::from_str(r#"{"zone": 12, "flag": "true"}"#).unwrap();
        assert_eq!(record.zone, None);
        assert!(!record.flag);

        let record: Record = serde_json::from_str(r#"{"zone": "nail", "flag": true}"#).unwrap();
        assert_eq!(record.zone.as_deref(), Some("nail"));
        assert!(record.flag);
    }

    #[test]
    fn test_count_separates_absent_from_malformed() {
        let parse = |json: &str| serde_json::from_str::<Record>(json).unwrap().attempts;

        assert_eq!(parse("{}"), None);
        assert_eq!(parse(r#"{"attempts": null}"#), None);
        assert_eq!(parse(r#"{"attempts": "3"}"#), Some(3.0));
        assert_eq!(parse(r#"{"attempts": []}"#), Some(0.0));
        assert_eq!(parse(r#"{"attempts": "abc"}"#), Some(0.0));
        assert_eq!(parse(r#"{"attempts": {"n": 2}}"#), Some(0.0));
    }
}
