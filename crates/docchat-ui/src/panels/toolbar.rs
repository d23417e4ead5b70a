//! Toolbar panel — upload hint, gate indicator, and the Clear Chat button.

use egui::{self, Align, Layout, RichText};

use crate::state::UiState;
use crate::theme::*;

/// What the caller should do after rendering the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    /// Nothing clicked
    None,
    /// The user asked to wipe the session
    ClearChat,
}

/// Render the toolbar. Uploads arrive through file drops handled by the
/// app layer, so the toolbar only hints at them.
pub fn toolbar_panel(ui: &mut egui::Ui, state: &UiState) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Drop PDF files anywhere to upload")
                .color(TEXT_SECONDARY)
                .small(),
        );

        ui.separator();

        if state.documents_ready {
            ui.label(RichText::new("● documents ready").color(SUCCESS).small());
        } else {
            ui.label(
                RichText::new("○ no documents yet")
                    .color(WARNING)
                    .small(),
            );
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let clear_btn = ui.add_enabled(
                !state.is_busy(),
                egui::Button::new(RichText::new("Clear Chat").color(TEXT_PRIMARY))
                    .fill(DANGER)
                    .corner_radius(PANEL_ROUNDING),
            );
            if clear_btn.clicked() {
                action = ToolbarAction::ClearChat;
            }
        });
    });

    action
}
