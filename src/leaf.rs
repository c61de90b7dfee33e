//! Leaf value display: scalar formatting and big-integer unquoting.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

fn re_quoted_int() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"^"-?\d+"$"#).unwrap())
}

/// Format a scalar JSON value for display.
///
/// Strings keep their surrounding quotes, numbers use their literal text,
/// booleans and null their keyword form. Containers are handled by the tree
/// renderer and produce no text here.
pub fn format_leaf(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Strip the quote pair from a quoted sign-optional integer.
///
/// The parser stores oversized integers as strings, which
/// [`format_leaf`] then renders as `"12345678901234567890"`. This removes
/// exactly one pair of surrounding quotes so the value reads as a number
/// again. Anything else — including quoted decimals and exponents — passes
/// through unchanged.
pub fn strip_bigint_quotes(display: &str) -> &str {
    if re_quoted_int().is_match(display) {
        &display[1..display.len() - 1]
    } else {
        display
    }
}

/// Display text for a scalar leaf: [`format_leaf`] with big-integer quotes
/// removed.
pub fn leaf_display(value: &Value) -> String {
    let formatted = format_leaf(value);
    strip_bigint_quotes(&formatted).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_scalars() {
        assert_eq!(format_leaf(&json!("text")), "\"text\"");
        assert_eq!(format_leaf(&json!(42)), "42");
        assert_eq!(format_leaf(&json!(1.5)), "1.5");
        assert_eq!(format_leaf(&json!(true)), "true");
        assert_eq!(format_leaf(&json!(null)), "null");
    }

    #[test]
    fn test_strip_quoted_integer() {
        assert_eq!(strip_bigint_quotes("\"123\""), "123");
        assert_eq!(strip_bigint_quotes("\"-123\""), "-123");
    }

    #[test]
    fn test_strip_leaves_plain_text_alone() {
        assert_eq!(strip_bigint_quotes("abc"), "abc");
        assert_eq!(strip_bigint_quotes("123"), "123");
        assert_eq!(strip_bigint_quotes("\"abc\""), "\"abc\"");
    }

    #[test]
    fn test_strip_passes_quoted_floats_through() {
        assert_eq!(strip_bigint_quotes("\"1.5\""), "\"1.5\"");
        assert_eq!(strip_bigint_quotes("\"1e20\""), "\"1e20\"");
    }

    #[test]
    fn test_strip_removes_exactly_one_quote_pair() {
        let inner = "12345678901234567890";
        let quoted = format!("\"{inner}\"");
        assert_eq!(strip_bigint_quotes(&quoted), inner);
        // Doubly quoted text is not a quoted integer; untouched.
        let doubled = format!("\"{quoted}\"");
        assert_eq!(strip_bigint_quotes(&doubled), doubled);
    }

    #[test]
    fn test_leaf_display_unquotes_preserved_big_int() {
        // A preserved big integer arrives here as a JSON string.
        let value = json!("12345678901234567890");
        assert_eq!(leaf_display(&value), "12345678901234567890");
    }

    #[test]
    fn test_leaf_display_keeps_real_strings_quoted() {
        assert_eq!(leaf_display(&json!("hello")), "\"hello\"");
    }
}
