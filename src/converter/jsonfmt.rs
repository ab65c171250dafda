use crate::error::ConvertError;
use serde_json::Value;

fn parse(input: &str) -> Result<Value, ConvertError> {
    if input.trim().is_empty() {
        return Err(ConvertError::precondition("No input provided"));
    }
    serde_json::from_str(input)
        .map_err(|e| ConvertError::conversion(format!("Invalid JSON: {}", e)))
}

/// Validates the input and pretty-prints it with two-space indentation.
pub fn format(input: &str) -> Result<String, ConvertError> {
    let value = parse(input)?;
    serde_json::to_string_pretty(&value)
        .map_err(|e| ConvertError::conversion(format!("Failed to serialize JSON: {}", e)))
}

/// Validates the input and re-serializes it without insignificant
/// whitespace.
pub fn minify(input: &str) -> Result<String, ConvertError> {
    let value = parse(input)?;
    serde_json::to_string(&value)
        .map_err(|e| ConvertError::conversion(format!("Failed to serialize JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_two_space_indent() {
        let formatted = format(r#"{"a":1,"b":[true,null]}"#).unwrap();
        assert_eq!(formatted, "{\n  \"a\": 1,\n  \"b\": [\n    true,\n    null\n  ]\n}");
    }

    #[test]
    fn minify_strips_whitespace() {
        let minified = minify("{\n  \"a\": 1,\n  \"b\": 2\n}").unwrap();
        assert_eq!(minified, r#"{"a":1,"b":2}"#);
    }

    #[test]
    fn rejects_invalid_json() {
        let err = format("{not json").unwrap_err();
        assert!(!err.is_precondition());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(format("  ").unwrap_err().is_precondition());
    }
}
