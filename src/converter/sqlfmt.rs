use crate::error::ConvertError;
use sqlformat::{FormatOptions, Indent, QueryParams};

/// Formats SQL with four-space indentation, uppercased keywords, and two
/// blank lines between statements.
pub fn format(input: &str) -> Result<String, ConvertError> {
    if input.trim().is_empty() {
        return Err(ConvertError::precondition("No input provided"));
    }
    let mut options = FormatOptions::default();
    options.indent = Indent::Spaces(4);
    options.uppercase = true;
    options.lines_between_queries = 2;
    Ok(sqlformat::format(input, &QueryParams::None, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_keywords() {
        let formatted = format("select id from users where id = 1").unwrap();
        assert!(formatted.contains("SELECT"));
        assert!(formatted.contains("FROM"));
        assert!(formatted.contains("WHERE"));
    }

    #[test]
    fn splits_clauses_onto_lines() {
        let formatted = format("select id, name from users").unwrap();
        assert!(formatted.lines().count() > 1);
    }

    #[test]
    fn rejects_empty_input() {
        assert!(format("").unwrap_err().is_precondition());
    }
}
