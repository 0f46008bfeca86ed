use eframe::egui::{self, RichText};
use sentiment_core::{AppViewModel, Msg};

use super::constants::*;
use super::render::{self, UiAction};

pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    }
}

/// Draws the whole window. `input` is the text area's backing buffer; edits
/// come back as `Msg::InputChanged`.
pub fn show(ctx: &egui::Context, view: &AppViewModel, input: &mut String) -> Vec<UiAction> {
    let mut actions = Vec::new();

    // Status bar at the very bottom
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(render::status_text(view));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button(BUTTON_CHECK_BACKEND).clicked() {
                    actions.push(UiAction::Send(Msg::CheckBackendClicked));
                }
            });
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new(HEADING).strong().color(COLOR_HEADING));
            });
            ui.add_space(12.0);

            let response = ui.add(
                egui::TextEdit::multiline(input)
                    .hint_text(INPUT_HINT)
                    .desired_rows(INPUT_ROWS)
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                actions.push(UiAction::Send(Msg::InputChanged(input.clone())));
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(BUTTON_ANALYZE).clicked() {
                    actions.push(UiAction::Send(Msg::AnalyzeClicked));
                }
                if ui.button(BUTTON_ANALYZE_FILE).clicked() {
                    actions.push(UiAction::PickFile);
                }
                if ui
                    .add_enabled(view.can_export, egui::Button::new(BUTTON_EXPORT))
                    .clicked()
                {
                    actions.push(UiAction::Send(Msg::ExportClicked));
                }
            });

            if let Some(result) = &view.result {
                ui.add_space(16.0);
                render::render_result(ui, result);
            }
        });
    });

    actions
}
