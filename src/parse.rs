//! Defensive JSON parsing with big-integer preservation.
//!
//! Grid cells frequently hold values that merely resemble JSON. The parser
//! here only invokes the decoder on strings whose first character is `{` or
//! `[`, never panics or propagates a decode failure, and guarantees that a
//! successful result is an object or an array.
//!
//! Integer literals wider than what an `f64` represents exactly are rewritten
//! to strings during decoding, so an id like `12345678901234567890` survives
//! the round trip to the display layer digit-for-digit instead of being
//! rounded. [`crate::leaf::strip_bigint_quotes`] removes the string quoting
//! again at display time.

use serde_json::Value;

use crate::cell::CellValue;

/// Largest integer every `f64` represents exactly (`2^53 - 1`).
///
/// Integer literals beyond this magnitude are preserved as strings.
pub const MAX_SAFE_INTEGER: i128 = (1 << 53) - 1;

/// Why the parser declined to produce a value.
///
/// The distinction between "never attempted" and "attempted and failed" is
/// deliberate; callers that only gate rendering can collapse it away with
/// [`safe_parse`].
#[derive(Debug, thiserror::Error)]
pub enum ParseRejection {
    /// The cell is not a string starting with `{` or `[`; the decoder was
    /// never invoked.
    #[error("cell does not look like a JSON object or array")]
    NotJsonShaped,
    /// The decoder rejected the string.
    #[error("invalid JSON: {0}")]
    Invalid(#[from] serde_json::Error),
    /// The string decoded to a bare scalar rather than a container.
    #[error("parsed JSON is not an object or array")]
    NotAContainer,
}

/// Parse a cell as a JSON container, preserving oversized integers.
///
/// Only [`CellValue::Text`] whose first character is `{` or `[` reaches the
/// decoder; everything else is rejected as [`ParseRejection::NotJsonShaped`]
/// without any parsing work.
pub fn parse_json_cell(cell: &CellValue) -> Result<Value, ParseRejection> {
    let text = cell.as_str().ok_or(ParseRejection::NotJsonShaped)?;
    if !matches!(text.as_bytes().first(), Some(b'{' | b'[')) {
        return Err(ParseRejection::NotJsonShaped);
    }

    let value: Value = serde_json::from_str(text)?;
    let value = preserve_big_ints(value);

    // The contract promises a container even if a future decoder were lax
    // about top-level scalars.
    if value.is_object() || value.is_array() {
        Ok(value)
    } else {
        Err(ParseRejection::NotAContainer)
    }
}

/// [`parse_json_cell`] with all rejections collapsed to `None`.
///
/// Never panics; the caller is expected to skip rendering on `None`.
pub fn safe_parse(cell: &CellValue) -> Option<Value> {
    match parse_json_cell(cell) {
        Ok(value) => Some(value),
        Err(rejection) => {
            log::debug!("cell not rendered as JSON: {rejection}");
            None
        }
    }
}

/// Rewrite every oversized integer literal in the tree to a string.
fn preserve_big_ints(value: Value) -> Value {
    match value {
        Value::Number(n) if exceeds_safe_precision(n.as_str()) => {
            Value::String(n.as_str().to_string())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(preserve_big_ints).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, preserve_big_ints(v)))
                .collect(),
        ),
        other => other,
    }
}

/// Whether a numeric literal is a plain integer too wide for exact `f64`
/// representation. Float literals (decimal point or exponent) never qualify.
fn exceeds_safe_precision(literal: &str) -> bool {
    let digits = literal.strip_prefix('-').unwrap_or(literal);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match literal.parse::<i128>() {
        Ok(n) => n.unsigned_abs() > MAX_SAFE_INTEGER as u128,
        // Wider than i128 is certainly wider than 2^53 - 1.
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_string_cells_rejected() {
        assert!(matches!(
            parse_json_cell(&CellValue::Number(12.0)),
            Err(ParseRejection::NotJsonShaped)
        ));
        assert!(matches!(
            parse_json_cell(&CellValue::Null),
            Err(ParseRejection::NotJsonShaped)
        ));
        assert!(safe_parse(&CellValue::Number(12.0)).is_none());
        assert!(safe_parse(&CellValue::Null).is_none());
    }

    #[test]
    fn test_non_container_strings_rejected_without_decoding() {
        for text in ["hello", "123", "\"quoted\"", "true", "null", ""] {
            assert!(
                matches!(
                    parse_json_cell(&CellValue::from(text)),
                    Err(ParseRejection::NotJsonShaped)
                ),
                "expected NotJsonShaped for {text:?}"
            );
        }
    }

    #[test]
    fn test_leading_whitespace_is_not_trimmed() {
        // The pre-filter looks at the first character only, matching the
        // cheap check the grid applies before handing cells over.
        assert!(safe_parse(&CellValue::from(r#"  {"a":1}"#)).is_none());
    }

    #[test]
    fn test_valid_object() {
        let value = safe_parse(&CellValue::from(r#"{"a":1}"#)).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_valid_array() {
        let value = safe_parse(&CellValue::from("[1,2,3]")).unwrap();
        assert_eq!(value, json!([1, 2, 3]));
    }

    #[test]
    fn test_malformed_json_rejected_not_panicking() {
        assert!(matches!(
            parse_json_cell(&CellValue::from("{a:}")),
            Err(ParseRejection::Invalid(_))
        ));
        assert!(safe_parse(&CellValue::from("[1, 2,")).is_none());
        assert!(safe_parse(&CellValue::from("{")).is_none());
    }

    #[test]
    fn test_big_integer_preserved_as_string() {
        let value = safe_parse(&CellValue::from(r#"{"id":12345678901234567890}"#)).unwrap();
        assert_eq!(value["id"], json!("12345678901234567890"));
    }

    #[test]
    fn test_negative_big_integer_preserved() {
        let value = safe_parse(&CellValue::from(r#"[-98765432109876543210]"#)).unwrap();
        assert_eq!(value[0], json!("-98765432109876543210"));
    }

    #[test]
    fn test_big_integers_preserved_in_nested_structures() {
        let raw = r#"{"rows":[{"id":90071992547409920},{"id":7}]}"#;
        let value = safe_parse(&CellValue::from(raw)).unwrap();
        assert_eq!(value["rows"][0]["id"], json!("90071992547409920"));
        assert_eq!(value["rows"][1]["id"], json!(7));
    }

    #[test]
    fn test_safe_integers_stay_numeric() {
        let raw = format!(r#"{{"max":{MAX_SAFE_INTEGER},"small":42}}"#);
        let value = safe_parse(&CellValue::from(raw.as_str())).unwrap();
        assert!(value["max"].is_number());
        assert!(value["small"].is_number());
    }

    #[test]
    fn test_first_unsafe_integer_becomes_string() {
        // 2^53 itself is the first integer an f64 cannot distinguish from
        // its neighbor.
        let raw = r#"{"id":9007199254740992}"#;
        let value = safe_parse(&CellValue::from(raw)).unwrap();
        assert_eq!(value["id"], json!("9007199254740992"));
    }

    #[test]
    fn test_float_literals_never_stringified() {
        let raw = r#"{"big":1e300,"frac":12345678901234567890.5}"#;
        let value = safe_parse(&CellValue::from(raw)).unwrap();
        assert!(value["big"].is_number());
        assert!(value["frac"].is_number());
    }

    #[test]
    fn test_result_is_always_a_container() {
        let value = safe_parse(&CellValue::from(r#"{"a":{"b":[1]}}"#)).unwrap();
        assert!(value.is_object() || value.is_array());
    }

    #[test]
    fn test_exceeds_safe_precision() {
        assert!(!exceeds_safe_precision("0"));
        assert!(!exceeds_safe_precision("-42"));
        assert!(!exceeds_safe_precision("9007199254740991"));
        assert!(exceeds_safe_precision("9007199254740992"));
        assert!(exceeds_safe_precision("-9007199254740992"));
        assert!(exceeds_safe_precision("340282366920938463463374607431768211456"));
        assert!(!exceeds_safe_precision("1.5"));
        assert!(!exceeds_safe_precision("1e20"));
    }

    #[test]
    fn test_rejection_messages() {
        let err = parse_json_cell(&CellValue::Null).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cell does not look like a JSON object or array"
        );
        let err = parse_json_cell(&CellValue::from("{a:}")).unwrap_err();
        assert!(err.to_string().starts_with("invalid JSON"));
    }
}
