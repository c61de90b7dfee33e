//! Raw cell values as they arrive from a results grid.

use std::fmt;

/// The original, possibly-unparsed representation of a grid cell.
///
/// This is what the modal trigger displays while the modal is closed, and
/// what the copy button places on the clipboard. The parsed tree is derived
/// from it by [`crate::parse::safe_parse`] but never replaces it.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// A textual cell (the only variant the JSON parser will look at).
    Text(String),
    /// A numeric cell.
    Number(f64),
    /// An absent value.
    Null,
}

impl CellValue {
    /// The cell text, if this is a textual cell.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Null => f.write_str("NULL"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}
