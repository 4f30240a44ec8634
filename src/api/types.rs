//! Catalog vocabulary and helpers for reading JSON documents
//!
//! Responses are kept as `serde_json::Value` so that fields the client does
//! not know about survive untouched; the accessors below cover the handful of
//! fields the client itself relies on.

use std::fmt;

use serde_json::Value;

/// Curated video listings offered by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoCategory {
    All,
    Newest,
    LastChance,
    MostViewed,
    Spotlight,
    Highlight,
    Premiere,
}

impl VideoCategory {
    /// API path of the listing
    pub fn path(self) -> &'static str {
        match self {
            Self::All => "videos/all",
            Self::Newest => "videos/newest",
            Self::LastChance => "videos/lastchance",
            Self::MostViewed => "videos/mostviewed",
            Self::Spotlight => "videos/spot",
            Self::Highlight => "videos/highlight",
            Self::Premiere => "videos/premiere",
        }
    }

    /// Cache file the listing is stored under
    pub fn cache_file(self) -> &'static str {
        match self {
            Self::All => "all.json",
            Self::Newest => "newest.json",
            Self::LastChance => "lastchance.json",
            Self::MostViewed => "mostviewed.json",
            Self::Spotlight => "spot.json",
            Self::Highlight => "highlight.json",
            Self::Premiere => "premiere.json",
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Newest => "newest",
            Self::LastChance => "last-chance",
            Self::MostViewed => "most-viewed",
            Self::Spotlight => "spotlight",
            Self::Highlight => "highlight",
            Self::Premiere => "premiere",
        }
    }
}

impl fmt::Display for VideoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// String field of a JSON object
pub fn str_field<'a>(value: &'a Value, name: &str) -> Option<&'a str> {
    value.get(name).and_then(Value::as_str)
}

/// `slug` of a program series
pub fn slug(series: &Value) -> Option<&str> {
    str_field(series, "slug")
}

/// `title` of a series or video
pub fn title(value: &Value) -> Option<&str> {
    str_field(value, "title")
}

/// Labels attached to a program series (empty when absent)
pub fn labels(series: &Value) -> impl Iterator<Item = &str> {
    series
        .get("labels")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
}

/// Whether a series carries `label`
pub fn has_label(series: &Value, label: &str) -> bool {
    labels(series).any(|l| l == label)
}

/// Numeric or string `id` of a video or chapter, rendered as text
pub fn id(value: &Value) -> Option<String> {
    match value.get("id")? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Flatten a listing response into its items
///
/// Null or blank responses are empty listings. Anything that is not an array
/// is not a listing either and also yields nothing.
pub fn into_list(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => {
            tracing::warn!(kind = json_kind(&other), "expected a JSON array, ignoring response");
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_paths_and_cache_files() {
        assert_eq!(VideoCategory::Spotlight.path(), "videos/spot");
        assert_eq!(VideoCategory::Spotlight.cache_file(), "spot.json");
        assert_eq!(VideoCategory::LastChance.path(), "videos/lastchance");
        assert_eq!(VideoCategory::MostViewed.cache_file(), "mostviewed.json");
    }

    #[test]
    fn test_labels_tolerate_missing_field() {
        let series = json!({"slug": "x"});
        assert_eq!(labels(&series).count(), 0);
        assert!(!has_label(&series, "Drama"));

        let series = json!({"slug": "y", "labels": ["Drama", 3, "Krimi"]});
        assert_eq!(labels(&series).collect::<Vec<_>>(), vec!["Drama", "Krimi"]);
    }

    #[test]
    fn test_id_accepts_numbers_and_strings() {
        assert_eq!(id(&json!({"id": 84011})), Some("84011".to_string()));
        assert_eq!(id(&json!({"id": "abc"})), Some("abc".to_string()));
        assert_eq!(id(&json!({"title": "no id"})), None);
    }

    #[test]
    fn test_into_list() {
        assert_eq!(into_list(json!([1, 2])).len(), 2);
        assert!(into_list(Value::Null).is_empty());
        assert!(into_list(json!("Not found")).is_empty());
        assert!(into_list(json!({"a": 1})).is_empty());
    }
}
