use crate::error::LineError;
use serde_yaml::Value;

pub const METADATA_PREFIX: &str = ">>";
pub const METADATA_SEPARATOR: char = ':';
pub const FRONT_MATTER_DELIMITER: &str = "---";

/// Split a `>> key: value` line into its key and value.
///
/// Keys may contain spaces. A line without `:` or with an empty key is an error.
pub fn parse_line(line: &str) -> Result<(String, String), LineError> {
    let body = line.strip_prefix(METADATA_PREFIX).unwrap_or(line).trim();
    match body.split_once(METADATA_SEPARATOR) {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(LineError::InvalidMetadata(body.to_string())),
    }
}

/// Decode a front matter block into metadata entries.
///
/// Scalars keep their string form, sequences are joined with `", "` and
/// nested mappings become `key: value` pairs joined the same way.
pub fn parse_front_matter(block: &str) -> Result<Vec<(String, String)>, LineError> {
    if block.trim().is_empty() {
        return Ok(Vec::new());
    }

    match serde_yaml::from_str::<Value>(block)? {
        Value::Null => Ok(Vec::new()),
        Value::Mapping(mapping) => Ok(mapping
            .into_iter()
            .map(|(key, value)| (to_text(key), to_text(value)))
            .collect()),
        other => Err(LineError::InvalidFrontMatter(format!(
            "expected key/value pairs, found {}",
            describe(&other)
        ))),
    }
}

fn to_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s,
        Value::Sequence(items) => items
            .into_iter()
            .map(to_text)
            .collect::<Vec<String>>()
            .join(", "),
        Value::Mapping(mapping) => mapping
            .into_iter()
            .map(|(key, value)| format!("{}: {}", to_text(key), to_text(value)))
            .collect::<Vec<String>>()
            .join(", "),
        Value::Tagged(tagged) => to_text(tagged.value),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
