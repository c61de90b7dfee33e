//! Inspect JSON cell values in an egui modal.
//!
//! `json-peek` is a small widget crate for applications that display tabular
//! data: when a cell holds a JSON document, the widget shows the raw value as
//! a clickable trigger that opens a modal window containing a collapsible,
//! theme-colored tree view of the parsed JSON, with an icon-only button to
//! copy the raw cell text to the clipboard.
//!
//! Parsing is defensive: [`parse::safe_parse`] only attempts to decode
//! strings that superficially look like a JSON object or array, swallows all
//! decode failures, and preserves integers too large for an `f64` as strings
//! so no precision is lost on display.
//!
//! ```no_run
//! use json_peek::{CellValue, JsonModalUI, Theme, safe_parse};
//!
//! let raw = CellValue::Text(r#"{"id":12345678901234567890}"#.to_string());
//! if let Some(json) = safe_parse(&raw) {
//!     let mut modal = JsonModalUI::new("Cell data", json, raw, &Theme::default());
//!     modal.open();
//!     // In the egui update loop:
//!     // modal.show_trigger(ui);
//!     // modal.show(ctx);
//! }
//! ```

pub mod cell;
pub mod clipboard;
pub mod leaf;
pub mod modal_ui;
pub mod parse;
pub mod theme;
pub mod tree_ui;

pub use cell::CellValue;
pub use modal_ui::{JsonModalAction, JsonModalUI};
pub use parse::{ParseRejection, parse_json_cell, safe_parse};
pub use theme::{Color, Theme, TreePalette};
