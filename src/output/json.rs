use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Format a list of catalog documents as JSON
pub fn format_values(values: &[Value]) -> Result<String> {
    Ok(serde_json::to_string_pretty(values)?)
}

/// Format any serializable value as JSON
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
