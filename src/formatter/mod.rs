//! Output formatting for jnav
//!
//! This module provides:
//! - Final output of the selected node (pretty JSON, optionally colored)
//! - Pretty-printed lines for the interactive contents pane
//! - Per-line JSON styling for the contents pane (see [`colorizer`])

pub mod colorizer;

use colored_json::prelude::*;
use serde_json::Value;

use crate::error::Result;

pub use colorizer::JsonLineStyler;

/// Formatter for the final result printed on stdout
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    /// Enable colored output
    use_colors: bool,
}

impl Formatter {
    /// Create a new formatter
    ///
    /// # Arguments
    /// * `use_colors` - Enable colored output
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Format the selected node; `None` (no results) prints as `null`
    ///
    /// # Arguments
    /// * `value` - Node to format
    ///
    /// # Returns
    /// * `Result<String>` - Pretty JSON, colored when enabled
    pub fn format(&self, value: Option<&Value>) -> Result<String> {
        let json_str = match value {
            Some(v) => serde_json::to_string_pretty(v)?,
            None => "null".to_string(),
        };

        if self.use_colors {
            Ok(json_str
                .to_colored_json(ColorMode::On)
                .unwrap_or(json_str))
        } else {
            Ok(json_str)
        }
    }
}

/// Pretty-print `value` and split it into lines for the contents pane
pub fn pretty_lines(value: &Value) -> Result<Vec<String>> {
    let pretty = serde_json::to_string_pretty(value)?;
    Ok(pretty.lines().map(str::to_string).collect())
}

/// Sorted keys of an object, or the index range of an array
///
/// Returns `None` for scalars, which have nothing to list.
pub fn key_lines(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<String> = map.keys().cloned().collect();
            keys.sort();
            Some(keys)
        }
        Value::Array(items) if items.is_empty() => Some(vec!["[]".to_string()]),
        Value::Array(items) => Some(vec![format!("0..{}", items.len() - 1)]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_format() {
        let formatter = Formatter::new(false);
        let out = formatter.format(Some(&json!({"a": [1, 2]}))).unwrap();
        assert_eq!(out, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn test_format_no_result() {
        let formatter = Formatter::new(false);
        assert_eq!(formatter.format(None).unwrap(), "null");
    }

    #[test]
    fn test_colored_format_keeps_content() {
        let formatter = Formatter::new(true);
        let out = formatter.format(Some(&json!({"key": "value"}))).unwrap();
        assert!(out.contains("key"));
        assert!(out.contains("value"));
    }

    #[test]
    fn test_pretty_lines() {
        let lines = pretty_lines(&json!({"a": 1, "b": [true]})).unwrap();
        assert_eq!(
            lines,
            vec!["{", "  \"a\": 1,", "  \"b\": [", "    true", "  ]", "}"]
        );
        assert_eq!(pretty_lines(&json!("s")).unwrap(), vec!["\"s\""]);
    }

    #[test]
    fn test_key_lines() {
        assert_eq!(
            key_lines(&json!({"b": 1, "a": 2})),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(
            key_lines(&json!([1, 2, 3])),
            Some(vec!["0..2".to_string()])
        );
        assert_eq!(key_lines(&json!([])), Some(vec!["[]".to_string()]));
        assert_eq!(key_lines(&json!(5)), None);
    }
}
