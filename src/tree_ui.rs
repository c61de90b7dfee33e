//! Collapsible tree view for a parsed JSON value.
//!
//! Objects and arrays become `egui::CollapsingHeader`s whose header shows a
//! collapsed summary (`{ 3 keys }`, `[ 5 items ]`); scalar leaves render as
//! colored monospace labels. All colors come from the [`TreePalette`] the
//! caller passes in — the widget reads no ambient theme state. Collapse
//! state itself lives in egui's memory under ids derived from the caller's
//! salt plus the key/index path, so the widget carries no state of its own.

use egui::text::LayoutJob;
use egui::{CollapsingHeader, Color32, FontId, RichText, TextFormat};
use serde_json::Value;

use crate::leaf;
use crate::theme::TreePalette;

/// How a node is labeled within its parent.
enum NodeKey<'a> {
    /// The top-level value; no label.
    Root,
    /// An object entry, labeled with its quoted key.
    Field(&'a str),
    /// An array element, labeled with its index.
    Index(usize),
}

/// Render a parsed JSON value as a collapsible tree.
///
/// `id_salt` scopes egui's collapse state; use a distinct salt per tree
/// instance shown in the same window.
pub fn show_tree(ui: &mut egui::Ui, id_salt: &str, value: &Value, palette: &TreePalette) {
    show_node(ui, id_salt, NodeKey::Root, value, palette, 0);
}

fn show_node(
    ui: &mut egui::Ui,
    id_path: &str,
    key: NodeKey<'_>,
    value: &Value,
    palette: &TreePalette,
    depth: usize,
) {
    match value {
        Value::Object(map) => {
            CollapsingHeader::new(header_job(&key, &container_summary(value), palette))
                .id_salt(id_path)
                .default_open(depth == 0)
                .show(ui, |ui| {
                    for (child_key, child) in map {
                        let child_id = format!("{id_path}/{child_key}");
                        show_node(
                            ui,
                            &child_id,
                            NodeKey::Field(child_key),
                            child,
                            palette,
                            depth + 1,
                        );
                    }
                });
        }
        Value::Array(items) => {
            CollapsingHeader::new(header_job(&key, &container_summary(value), palette))
                .id_salt(id_path)
                .default_open(depth == 0)
                .show(ui, |ui| {
                    for (index, child) in items.iter().enumerate() {
                        let child_id = format!("{id_path}/{index}");
                        show_node(
                            ui,
                            &child_id,
                            NodeKey::Index(index),
                            child,
                            palette,
                            depth + 1,
                        );
                    }
                });
        }
        _ => show_leaf(ui, &key, value, palette),
    }
}

/// Render a scalar leaf: optional key label, then the value.
fn show_leaf(ui: &mut egui::Ui, key: &NodeKey<'_>, value: &Value, palette: &TreePalette) {
    ui.horizontal(|ui| {
        match key {
            NodeKey::Root => {}
            NodeKey::Field(name) => {
                ui.label(
                    RichText::new(format!("\"{name}\":"))
                        .monospace()
                        .color(rgb(palette.key())),
                );
            }
            NodeKey::Index(index) => {
                ui.label(
                    RichText::new(format!("{index}:"))
                        .monospace()
                        .color(rgb(palette.dim())),
                );
            }
        }

        let mut text = RichText::new(leaf::leaf_display(value))
            .monospace()
            .color(rgb(scalar_color(value, palette)));
        if value.is_null() {
            text = text.italics();
        }
        ui.label(text);
    });
}

/// Build the collapsing header text: key label plus dim collapsed summary.
fn header_job(key: &NodeKey<'_>, summary: &str, palette: &TreePalette) -> LayoutJob {
    let font = FontId::monospace(12.0);
    let mut job = LayoutJob::default();

    match key {
        NodeKey::Root => {}
        NodeKey::Field(name) => {
            job.append(
                &format!("\"{name}\": "),
                0.0,
                TextFormat {
                    font_id: font.clone(),
                    color: rgb(palette.key()),
                    ..Default::default()
                },
            );
        }
        NodeKey::Index(index) => {
            job.append(
                &format!("{index}: "),
                0.0,
                TextFormat {
                    font_id: font.clone(),
                    color: rgb(palette.dim()),
                    ..Default::default()
                },
            );
        }
    }

    job.append(
        summary,
        0.0,
        TextFormat {
            font_id: font,
            color: rgb(palette.dim()),
            italics: true,
            ..Default::default()
        },
    );
    job
}

/// Collapsed summary for a container node (`{ 3 keys }`, `[ 5 items ]`).
fn container_summary(value: &Value) -> String {
    match value {
        Value::Object(map) => format!("{{ {count} keys }}", count = map.len()),
        Value::Array(items) => format!("[ {count} items ]", count = items.len()),
        _ => String::new(),
    }
}

/// Palette color for a scalar value by its JSON type.
fn scalar_color(value: &Value, palette: &TreePalette) -> [u8; 3] {
    match value {
        Value::String(_) => palette.string(),
        Value::Number(_) => palette.number(),
        Value::Bool(_) => palette.boolean(),
        Value::Null => palette.dim(),
        Value::Array(_) | Value::Object(_) => palette.fg,
    }
}

fn rgb(color: [u8; 3]) -> Color32 {
    Color32::from_rgb(color[0], color[1], color[2])
}
