use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct PeakSubtractApp {
    pub state: AppState,
}

impl eframe::App for PeakSubtractApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: inputs ----
        egui::SidePanel::left("input_panel")
            .default_width(340.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::input_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: stick spectrum ----
        if self.state.outcome.is_some() {
            egui::TopBottomPanel::bottom("plot_panel")
                .default_height(260.0)
                .resizable(true)
                .show(ctx, |ui| {
                    plot::peak_plot(ui, &self.state);
                });
        }

        // ---- Central panel: result table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::result_table(ui, &self.state);
        });
    }
}
