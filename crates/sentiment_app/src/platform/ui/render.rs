use eframe::egui::{self, Color32, RichText};
use sentiment_core::{AppViewModel, BackendStatus, ExportNotice, ResultRowView, ResultView, Tone};

use super::constants::*;

/// What the user asked for during one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Send(sentiment_core::Msg),
    /// Opens the native file picker; handled outside the frame closure.
    PickFile,
}

pub fn render_result(ui: &mut egui::Ui, result: &ResultView) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(RESULT_HEADING).strong().size(16.0));
        ui.add_space(4.0);
        // Line breaks in the summary are kept as-is.
        ui.label(RichText::new(&result.summary).color(COLOR_SUMMARY));

        if let Some(rows) = &result.rows {
            ui.add_space(8.0);
            egui::ScrollArea::vertical()
                .max_height(TABLE_MAX_HEIGHT)
                .show(ui, |ui| render_table(ui, rows));
        }
    });
}

fn render_table(ui: &mut egui::Ui, rows: &[ResultRowView]) {
    egui::Grid::new("sentence_results")
        .num_columns(2)
        .striped(true)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label(RichText::new(COLUMN_SENTENCE).strong());
            ui.label(RichText::new(COLUMN_SENTIMENT).strong());
            ui.end_row();

            for row in rows {
                ui.label(row.text.as_str());
                ui.label(
                    RichText::new(&row.sentiment)
                        .color(tone_color(row.tone))
                        .strong(),
                );
                ui.end_row();
            }
        });
}

pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Positive => COLOR_POSITIVE,
        Tone::Negative => COLOR_NEGATIVE,
        Tone::Neutral => COLOR_NEUTRAL,
    }
}

pub fn status_text(view: &AppViewModel) -> String {
    let backend = match view.backend {
        BackendStatus::Unknown => "checking…",
        BackendStatus::Online => "online",
        BackendStatus::Offline => "offline",
    };
    match &view.export_notice {
        Some(ExportNotice::Written { path }) => {
            format!("Backend: {backend} | Exported to {path}")
        }
        Some(ExportNotice::Failed { message }) => {
            format!("Backend: {backend} | Export failed: {message}")
        }
        None => format!("Backend: {backend}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_labels_are_colored() {
        assert_eq!(tone_color(Tone::from_label("Positive")), COLOR_POSITIVE);
        assert_eq!(tone_color(Tone::from_label("Negative")), COLOR_NEGATIVE);
        assert_eq!(tone_color(Tone::from_label("Neutral")), COLOR_NEUTRAL);
        assert_eq!(tone_color(Tone::from_label("NEGATIVE")), COLOR_NEUTRAL);
        assert_ne!(COLOR_NEUTRAL, COLOR_POSITIVE);
        assert_ne!(COLOR_NEUTRAL, COLOR_NEGATIVE);
    }

    #[test]
    fn status_text_reports_backend_and_export() {
        let mut view = AppViewModel::default();
        assert_eq!(status_text(&view), "Backend: checking…");

        view.backend = BackendStatus::Online;
        view.export_notice = Some(ExportNotice::Written {
            path: "output/results.csv".to_string(),
        });
        assert_eq!(
            status_text(&view),
            "Backend: online | Exported to output/results.csv"
        );

        view.backend = BackendStatus::Offline;
        view.export_notice = Some(ExportNotice::Failed {
            message: "denied".to_string(),
        });
        assert_eq!(status_text(&view), "Backend: offline | Export failed: denied");
    }
}
