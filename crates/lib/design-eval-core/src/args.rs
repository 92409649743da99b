//! Lenient deserializers for prompt and tool arguments.
//!
//! MCP clients usually send prompt arguments as plain strings, so list and
//! depth parameters accept their native JSON shape as well as a string form.
//! Use these with `#[serde(default, deserialize_with = "...")]`.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Deserializes a list from a JSON array, a string holding a JSON array,
/// or a comma/newline separated string. Items are trimmed and blanks dropped.
///
/// # Errors
/// Fails when the value is neither a string, an array of strings, nor null.
pub fn list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => clean_item(&text).map(Ok),
                Value::Null => None,
                other => Some(Err(de::Error::custom(format!(
                    "expected a string list item, found {other}"
                )))),
            })
            .collect(),
        Some(Value::String(text)) => Ok(split_list(&text)),
        Some(other) => Err(de::Error::custom(format!(
            "expected a list or a comma separated string, found {other}"
        ))),
    }
}

/// Deserializes an optional string, treating blank text as absent.
///
/// # Errors
/// Fails when the value is not a string or null.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|text| clean_item(&text)))
}

/// Deserializes an optional non-negative depth from an integer or a numeric
/// string. Blank strings and null are treated as absent.
///
/// # Errors
/// Fails on negative, fractional, or non-numeric input.
pub fn optional_depth<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number
            .as_u64()
            .and_then(|depth| u32::try_from(depth).ok())
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid depth: {number}"))),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<u32>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid depth: {trimmed}")))
        }
        Some(other) => Err(de::Error::custom(format!("invalid depth: {other}"))),
    }
}

/// Splits free-form list text. A string that parses as a JSON array of
/// strings is taken as that array.
#[must_use]
pub fn split_list(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.starts_with('[')
        && let Ok(items) = serde_json::from_str::<Vec<String>>(trimmed)
    {
        return items.iter().map(String::as_str).filter_map(clean_item).collect();
    }
    trimmed
        .split([',', '\n'])
        .filter_map(clean_item)
        .collect()
}

fn clean_item(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "list")]
        files: Vec<String>,
        #[serde(default, deserialize_with = "optional_depth")]
        depth: Option<u32>,
        #[serde(default, deserialize_with = "optional_text")]
        note: Option<String>,
    }

    fn parse(value: serde_json::Value) -> Fields {
        serde_json::from_value(value).expect("fields should deserialize")
    }

    #[test]
    fn list_accepts_arrays_and_strings() {
        assert_eq!(
            parse(json!({ "files": ["src/a.rs", " ", "src/b.rs"] })).files,
            vec!["src/a.rs", "src/b.rs"]
        );
        assert_eq!(
            parse(json!({ "files": "src/a.rs, src/b.rs\nsrc/c.rs" })).files,
            vec!["src/a.rs", "src/b.rs", "src/c.rs"]
        );
        assert_eq!(
            parse(json!({ "files": "[\"x, y.ts\", \"z.ts\"]" })).files,
            vec!["x, y.ts", "z.ts"]
        );
    }

    #[test]
    fn missing_and_null_values_are_empty() {
        let empty = parse(json!({}));
        assert!(empty.files.is_empty());
        assert_eq!(empty.depth, None);
        assert_eq!(empty.note, None);

        let nulls = parse(json!({ "files": null, "depth": null, "note": null }));
        assert!(nulls.files.is_empty());
        assert_eq!(nulls.depth, None);
    }

    #[test]
    fn depth_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse(json!({ "depth": 4 })).depth, Some(4));
        assert_eq!(parse(json!({ "depth": " 2 " })).depth, Some(2));
        assert_eq!(parse(json!({ "depth": "" })).depth, None);
    }

    #[test]
    fn depth_rejects_negative_and_garbage() {
        assert!(serde_json::from_value::<Fields>(json!({ "depth": -1 })).is_err());
        assert!(serde_json::from_value::<Fields>(json!({ "depth": "deep" })).is_err());
        assert!(serde_json::from_value::<Fields>(json!({ "depth": 1.5 })).is_err());
    }

    #[test]
    fn blank_text_is_absent() {
        assert_eq!(parse(json!({ "note": "   " })).note, None);
        assert_eq!(parse(json!({ "note": " auth " })).note.as_deref(), Some("auth"));
    }

    #[test]
    fn list_rejects_non_string_items() {
        assert!(serde_json::from_value::<Fields>(json!({ "files": [1, 2] })).is_err());
        assert!(serde_json::from_value::<Fields>(json!({ "files": 7 })).is_err());
    }
}
