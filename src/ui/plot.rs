use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use peak_subtract::data::model::Peak;

use crate::state::AppState;

const RETAINED_COLOR: Color32 = Color32::LIGHT_BLUE;
const REMOVED_COLOR: Color32 = Color32::from_rgb(230, 110, 80);

// ---------------------------------------------------------------------------
// Stick spectrum (bottom panel)
// ---------------------------------------------------------------------------

/// Render every sample peak as a stick, coloured by whether it was removed.
pub fn peak_plot(ui: &mut Ui, state: &AppState) {
    let Some(outcome) = &state.outcome else {
        return;
    };

    let width = stick_width(outcome.scored.iter().map(|sp| &sp.peak));
    let sticks = |peaks: Vec<&Peak>| -> Vec<Bar> {
        peaks
            .into_iter()
            .map(|p| Bar::new(p.mz, p.intensity).width(width))
            .collect()
    };

    let retained = BarChart::new(sticks(outcome.retained().collect()))
        .name("Retained")
        .color(RETAINED_COLOR);
    let removed = BarChart::new(sticks(outcome.removed().collect()))
        .name("Background")
        .color(REMOVED_COLOR);

    Plot::new("peak_plot")
        .legend(Legend::default())
        .x_axis_label("m/z")
        .y_axis_label("Intensity")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(retained);
            plot_ui.bar_chart(removed);
        });
}

/// A stick width that stays visible over the plotted m/z range.
fn stick_width<'a>(peaks: impl Iterator<Item = &'a Peak>) -> f64 {
    let (min, max) = peaks
        .map(|p| p.mz)
        .filter(|mz| mz.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), mz| {
            (lo.min(mz), hi.max(mz))
        });
    let range = max - min;
    if range.is_finite() && range > 0.0 {
        (range / 1000.0).max(1e-3)
    } else {
        0.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stick_width_follows_range() {
        let peaks = [Peak::new(100.0, 1.0), Peak::new(1100.0, 1.0)];
        assert_eq!(stick_width(peaks.iter()), 1.0);
    }

    #[test]
    fn stick_width_degenerate_ranges() {
        let empty: [Peak; 0] = [];
        assert_eq!(stick_width(empty.iter()), 0.1);
        let single = [Peak::new(500.0, 1.0), Peak::new(f64::NAN, 1.0)];
        assert_eq!(stick_width(single.iter()), 0.1);
        let close = [Peak::new(500.0, 1.0), Peak::new(500.0001, 1.0)];
        assert_eq!(stick_width(close.iter()), 1e-3);
    }
}
