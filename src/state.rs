use std::ops::RangeInclusive;
use std::path::Path;

use peak_subtract::data::export::write_csv;
use peak_subtract::data::filter;
use peak_subtract::data::matcher::DEFAULT_TOLERANCE_PPM;
use peak_subtract::data::model::{FilterOutcome, Peak, PeakListKind};
use peak_subtract::data::parser::read_peak_text;

/// Shown instead of running the filter when an input box is blank.
pub const MISSING_INPUT_MESSAGE: &str = "Please paste both Background and Sample data!";

/// Tolerances the UI lets the user pick, in ppm.
pub const TOLERANCE_RANGE: RangeInclusive<f64> = 0.1..=1000.0;

// ---------------------------------------------------------------------------
// Status line
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Success(String),
    Error(String),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Pasted background peaks (only the m/z column is used).
    pub background_text: String,

    /// Pasted sample peaks.
    pub sample_text: String,

    /// Matching tolerance in ppm of the sample m/z.
    pub tolerance_ppm: f64,

    /// Result of the last successful run (None before the first run or after an error).
    pub outcome: Option<FilterOutcome>,

    /// Status / error message shown in the UI.
    pub status: Option<Status>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            background_text: String::new(),
            sample_text: String::new(),
            tolerance_ppm: DEFAULT_TOLERANCE_PPM,
            outcome: None,
            status: None,
        }
    }
}

impl AppState {
    /// Mutable access to one of the two input boxes.
    pub fn text_mut(&mut self, kind: PeakListKind) -> &mut String {
        match kind {
            PeakListKind::Sample => &mut self.sample_text,
            PeakListKind::Background => &mut self.background_text,
        }
    }

    /// Run background subtraction on the current inputs.
    pub fn run_filter(&mut self) {
        if self.background_text.trim().is_empty() || self.sample_text.trim().is_empty() {
            log::warn!("Filter requested with a blank input");
            self.outcome = None;
            self.status = Some(Status::Error(MISSING_INPUT_MESSAGE.to_string()));
            return;
        }

        match filter::run(&self.sample_text, &self.background_text, self.tolerance_ppm) {
            Ok(outcome) => {
                log::info!(
                    "Filtered {} sample peaks at {} ppm: {} retained, {} removed",
                    outcome.len(),
                    outcome.tolerance_ppm,
                    outcome.retained_count(),
                    outcome.removed_count()
                );
                self.status = Some(Status::Success(format!(
                    "Filtering complete. {} peaks remaining.",
                    outcome.retained_count()
                )));
                self.outcome = Some(outcome);
            }
            Err(e) => {
                let e = anyhow::Error::new(e);
                log::error!("Failed to parse peaks: {e:#}");
                self.outcome = None;
                self.status = Some(Status::Error(format!("Error: {e:#}")));
            }
        }
    }

    /// Retained peaks of the last run, in input order.
    pub fn retained_peaks(&self) -> Vec<Peak> {
        self.outcome
            .as_ref()
            .map(|o| o.retained().copied().collect())
            .unwrap_or_default()
    }

    /// Whether there is a result to export.
    pub fn can_export(&self) -> bool {
        self.outcome.is_some()
    }

    /// Replace one input box with the contents of a text file.
    pub fn load_file(&mut self, kind: PeakListKind, path: &Path) {
        match read_peak_text(path) {
            Ok(text) => {
                log::info!("Loaded {kind} peaks from {}", path.display());
                *self.text_mut(kind) = text;
                self.status = None;
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status = Some(Status::Error(format!("Error: {e:#}")));
            }
        }
    }

    /// Save the retained peaks of the last run as CSV.
    pub fn export_csv(&mut self, path: &Path) {
        let peaks = self.retained_peaks();
        match write_csv(path, &peaks) {
            Ok(()) => {
                log::info!("Exported {} peaks to {}", peaks.len(), path.display());
                self.status = Some(Status::Success(format!(
                    "Saved {} peaks to {}",
                    peaks.len(),
                    path.display()
                )));
            }
            Err(e) => {
                log::error!("Failed to export CSV: {e:#}");
                self.status = Some(Status::Error(format!("Error: {e:#}")));
            }
        }
    }

    /// Forget inputs and results; the tolerance is kept.
    pub fn clear(&mut self) {
        self.background_text.clear();
        self.sample_text.clear();
        self.outcome = None;
        self.status = None;
    }
}
