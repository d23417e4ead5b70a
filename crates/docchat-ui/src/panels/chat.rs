//! Chat panel — displays the transcript and the query input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use docchat_types::message::{Message, Sender};

use crate::state::UiState;
use crate::theme::*;

/// Render the chat panel. Returns Some(text) when the user submits a
/// query; the caller dispatches it to the controller, which appends the
/// user message and replays it back through the event bus.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Messages area
                let available_height = ui.available_height() - 48.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in &state.messages {
                            render_message(ui, message);
                            ui.add_space(6.0);
                        }

                        if state.is_busy() {
                            ui.label(
                                RichText::new(&state.status_text)
                                    .color(TEXT_SECONDARY)
                                    .italics(),
                            );
                        }
                    });

                ui.add_space(8.0);

                // Input area
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Ask something about the documents...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let send_enabled =
                        !state.input_text.trim().is_empty() && !state.is_busy();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    if (response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        && send_enabled)
                        || send_btn.clicked()
                    {
                        submitted = Some(state.input_text.trim().to_string());
                        state.input_text.clear();
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    // User bubbles hug the right edge, bot bubbles the left, matching
    // the transcript layout users expect from messaging apps.
    match message.sender {
        Sender::User => {
            ui.with_layout(Layout::right_to_left(Align::TOP), |ui| {
                bubble(ui, &message.text, ACCENT);
            });
        }
        Sender::Bot => {
            ui.with_layout(Layout::left_to_right(Align::TOP), |ui| {
                bubble(ui, &message.text, BG_SURFACE);
            });
        }
    }
}

fn bubble(ui: &mut egui::Ui, text: &str, fill: egui::Color32) {
    let max_width = ui.available_width() * 0.75;
    egui::Frame::default()
        .fill(fill)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_max_width(max_width);
            ui.label(RichText::new(text).color(TEXT_PRIMARY));
        });
}
