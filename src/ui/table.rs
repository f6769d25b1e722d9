use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use peak_subtract::data::model::Peak;

use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Result table (central panel)
// ---------------------------------------------------------------------------

/// Render the retained peaks as an `m/z | Intensity` table.
pub fn result_table(ui: &mut Ui, state: &AppState) {
    let Some(outcome) = &state.outcome else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Paste both peak lists and press Filter Peaks");
        });
        return;
    };

    let peaks: Vec<&Peak> = outcome.retained().collect();
    if peaks.is_empty() {
        ui.label(RichText::new("Every sample peak matched the background.").italics());
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(40.0))
        .column(Column::initial(140.0).at_least(80.0))
        .column(Column::remainder())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            header.col(|ui| {
                ui.strong("m/z");
            });
            header.col(|ui| {
                ui.strong("Intensity");
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, peaks.len(), |mut row| {
                let i = row.index();
                let peak = peaks[i];
                row.col(|ui| {
                    ui.label(i.to_string());
                });
                row.col(|ui| {
                    ui.monospace(peak.mz.to_string());
                });
                row.col(|ui| {
                    ui.monospace(peak.intensity.to_string());
                });
            });
        });
}
