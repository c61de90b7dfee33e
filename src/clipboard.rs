//! Copy-to-clipboard helper and icon-only copy button.

/// Copy text to the system clipboard.
///
/// Returns whether the copy succeeded. Failures are logged, never surfaced:
/// a missing clipboard (headless session, denied access) must not break the
/// UI around it.
pub fn copy_text(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("clipboard write failed: {e}");
                false
            }
        },
        Err(e) => {
            log::warn!("clipboard unavailable: {e}");
            false
        }
    }
}

/// Icon-only copy button; the textual label is suppressed in favor of hover
/// text. Returns `true` if the button was clicked and the copy succeeded.
pub fn copy_button(ui: &mut egui::Ui, text_to_copy: &str) -> bool {
    let response = ui.button("📋").on_hover_text("Copy to clipboard");
    if response.clicked() {
        copy_text(text_to_copy)
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Clipboard access is environment-dependent; the contract under test is
    // that failure is reported as `false` rather than a panic or error.
    #[test]
    fn test_copy_text_never_panics() {
        let _ = copy_text("json-peek test");
    }

    #[test]
    fn test_copy_button_without_click_does_not_copy() {
        let ctx = egui::Context::default();
        let mut copied = false;
        let _ = ctx.run(Default::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                copied = copy_button(ui, "text");
            });
        });
        assert!(!copied);
    }
}
