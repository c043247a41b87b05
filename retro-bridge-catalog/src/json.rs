//! Lenient field handling for hand-edited AEL/AML JSON.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a string, number, bool or null where a string is expected.
///
/// AEL writes most fields as strings, but older databases and manual edits
/// leave years and player counts as bare numbers.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_string(&value))
}

pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Non-empty string value of `key` in an asset map.
pub(crate) fn asset_path(
    assets: &serde_json::Map<String, Value>,
    key: &str,
) -> Option<String> {
    assets
        .get(key)
        .map(value_to_string)
        .filter(|s| !s.is_empty())
}
