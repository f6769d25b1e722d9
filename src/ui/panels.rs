use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use peak_subtract::data::export::EXPORT_FILE_NAME;
use peak_subtract::data::model::PeakListKind;

use crate::state::{AppState, Status, TOLERANCE_RANGE};

const USAGE: &str = "Paste your Background Peaks and Sample Peaks below.\n\
Each line should have m/z and intensity separated by space.";

const EXAMPLE: &str = "500.001 1200\n600.002 1100\n700.003 900";

// ---------------------------------------------------------------------------
// Left side panel – inputs
// ---------------------------------------------------------------------------

/// Render the input panel: both peak lists, the tolerance and the run button.
pub fn input_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Background Subtraction");
    ui.separator();

    ui.label(USAGE);
    ui.label(RichText::new(EXAMPLE).monospace().weak());
    ui.add_space(4.0);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            peak_text_box(
                ui,
                state,
                PeakListKind::Background,
                "Paste Background Peaks (m/z and Intensity)",
            );
            ui.add_space(6.0);
            peak_text_box(
                ui,
                state,
                PeakListKind::Sample,
                "Paste Sample Peaks (m/z and Intensity)",
            );
            ui.add_space(6.0);

            ui.horizontal(|ui: &mut Ui| {
                ui.label("Tolerance");
                ui.add(
                    egui::DragValue::new(&mut state.tolerance_ppm)
                        .range(TOLERANCE_RANGE)
                        .speed(0.1)
                        .suffix(" ppm"),
                );
            });
            ui.add_space(6.0);

            if ui.button("Filter Peaks").clicked() {
                state.run_filter();
            }
            status_line(ui, state);
        });
}

fn peak_text_box(ui: &mut Ui, state: &mut AppState, kind: PeakListKind, label: &str) {
    ui.strong(label);
    ui.add(
        egui::TextEdit::multiline(state.text_mut(kind))
            .id_salt(kind.to_string())
            .code_editor()
            .desired_rows(10)
            .desired_width(f32::INFINITY),
    );
}

fn status_line(ui: &mut Ui, state: &AppState) {
    match &state.status {
        Some(Status::Success(msg)) => {
            ui.label(RichText::new(msg).color(Color32::DARK_GREEN));
        }
        Some(Status::Error(msg)) => {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
        None => {}
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open background…").clicked() {
                open_file_dialog(state, PeakListKind::Background);
                ui.close_menu();
            }
            if ui.button("Open sample…").clicked() {
                open_file_dialog(state, PeakListKind::Sample);
                ui.close_menu();
            }
            ui.separator();
            if ui
                .add_enabled(state.can_export(), egui::Button::new("Export CSV…"))
                .clicked()
            {
                save_file_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Clear").clicked() {
                state.clear();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(outcome) = &state.outcome {
            ui.label(format!(
                "{} sample peaks, {} retained, {} removed at {} ppm",
                outcome.len(),
                outcome.retained_count(),
                outcome.removed_count(),
                outcome.tolerance_ppm
            ));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState, kind: PeakListKind) {
    let file = rfd::FileDialog::new()
        .set_title(format!("Open {kind} peak list"))
        .add_filter("Peak lists", &["txt", "tsv", "csv", "xy"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.load_file(kind, &path);
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Download filtered peaks")
        .set_file_name(EXPORT_FILE_NAME)
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        state.export_csv(&path);
    }
}
