//! Modal window for inspecting a parsed JSON cell value.
//!
//! [`JsonModalUI`] owns no lifecycle beyond the `visible` flag: the trigger
//! opens the window, the window's close button or Escape closes it, and all
//! interesting content (tree body, copy footer) is delegated to
//! [`crate::tree_ui`] and [`crate::clipboard`]. Callers are expected to gate
//! construction on [`crate::parse::safe_parse`] returning `Some`; the modal
//! performs no validation of its own.

use serde_json::Value;

use crate::cell::CellValue;
use crate::theme::{Theme, TreePalette};
use crate::{clipboard, tree_ui};

/// Action to take after showing the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonModalAction {
    /// No action needed.
    None,
    /// The raw cell value was copied to the clipboard.
    Copied,
    /// The modal was closed this frame.
    Closed,
}

/// Modal JSON viewer for a single cell.
pub struct JsonModalUI {
    /// Whether the modal window is currently visible.
    pub visible: bool,
    /// Window title.
    title: String,
    /// The parsed JSON value (always an object or array).
    json: Value,
    /// The raw cell value shown on the trigger and copied to the clipboard.
    raw: CellValue,
    /// Palette derived from the current theme.
    palette: TreePalette,
    /// Name of the theme the palette was derived from.
    theme_name: String,
}

impl JsonModalUI {
    /// Create a closed modal for a parsed cell.
    ///
    /// `json` should come from [`crate::parse::safe_parse`] on `raw`.
    pub fn new(title: impl Into<String>, json: Value, raw: CellValue, theme: &Theme) -> Self {
        Self {
            visible: false,
            title: title.into(),
            json,
            raw,
            palette: TreePalette::from_theme(theme),
            theme_name: theme.name.clone(),
        }
    }

    /// Re-derive the palette if the theme changed.
    ///
    /// The palette is memoized by theme name; passing the current theme every
    /// frame costs a string comparison.
    pub fn set_theme(&mut self, theme: &Theme) {
        if theme.name != self.theme_name {
            self.palette = TreePalette::from_theme(theme);
            self.theme_name = theme.name.clone();
            log::debug!("json modal palette rederived from theme {}", theme.name);
        }
    }

    /// Open the modal.
    pub fn open(&mut self) {
        self.visible = true;
        log::debug!("json modal opened: {}", self.title);
    }

    /// Close the modal.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// The text the trigger shows and the copy button copies.
    pub fn raw_text(&self) -> String {
        self.raw.to_string()
    }

    /// The parsed JSON value this modal displays.
    pub fn json(&self) -> &Value {
        &self.json
    }

    /// Render the trigger: the raw cell value as a link that opens the modal.
    pub fn show_trigger(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let response = ui.link(self.raw_text());
        if response.clicked() {
            self.open();
        }
        response
    }

    /// Render the modal window and return any action triggered.
    pub fn show(&mut self, ctx: &egui::Context) -> JsonModalAction {
        if !self.visible {
            return JsonModalAction::None;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.close();
            return JsonModalAction::Closed;
        }

        let mut action = JsonModalAction::None;
        let mut open = true;
        let raw_text = self.raw_text();

        egui::Window::new(self.title.clone())
            .collapsible(false)
            .resizable(true)
            .default_size(egui::vec2(480.0, 420.0))
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .open(&mut open)
            .show(ctx, |ui| {
                // Body: collapsible tree of the parsed value.
                egui::ScrollArea::vertical()
                    .max_height(ui.available_height() - 40.0)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        tree_ui::show_tree(ui, "json-peek-modal", &self.json, &self.palette);
                    });

                // Footer: icon-only copy control for the raw value.
                ui.separator();
                ui.horizontal(|ui| {
                    if clipboard::copy_button(ui, &raw_text) {
                        log::debug!("copied raw cell value ({} bytes)", raw_text.len());
                        action = JsonModalAction::Copied;
                    }
                });
            });

        if !open {
            self.visible = false;
            action = JsonModalAction::Closed;
        }

        action
    }
}
