use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// PeakListKind – which of the two pasted lists we are talking about
// ---------------------------------------------------------------------------

/// Identifies one of the two text inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeakListKind {
    Sample,
    Background,
}

impl fmt::Display for PeakListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeakListKind::Sample => write!(f, "sample"),
            PeakListKind::Background => write!(f, "background"),
        }
    }
}

// ---------------------------------------------------------------------------
// Peak – one line of the sample list
// ---------------------------------------------------------------------------

/// A centroided peak. Field names on the wire are the CSV column headers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Peak {
    #[serde(rename = "m/z")]
    pub mz: f64,
    #[serde(rename = "Intensity")]
    pub intensity: f64,
}

impl Peak {
    pub fn new(mz: f64, intensity: f64) -> Self {
        Self { mz, intensity }
    }
}

// ---------------------------------------------------------------------------
// ScoredPeak / FilterOutcome – one filter invocation
// ---------------------------------------------------------------------------

/// A sample peak together with the background match flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredPeak {
    pub peak: Peak,
    pub is_background: bool,
}

/// Every sample peak of one run, in input order, with its match flag.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub scored: Vec<ScoredPeak>,
    /// Tolerance the run was made with, in ppm of the sample m/z.
    pub tolerance_ppm: f64,
}

impl FilterOutcome {
    /// Peaks that did not match any background m/z, in input order.
    pub fn retained(&self) -> impl Iterator<Item = &Peak> + '_ {
        self.scored
            .iter()
            .filter(|sp| !sp.is_background)
            .map(|sp| &sp.peak)
    }

    /// Peaks that were attributed to the background.
    pub fn removed(&self) -> impl Iterator<Item = &Peak> + '_ {
        self.scored
            .iter()
            .filter(|sp| sp.is_background)
            .map(|sp| &sp.peak)
    }

    /// Owned copy of the retained peaks (the filter result proper).
    pub fn into_retained(self) -> Vec<Peak> {
        self.scored
            .into_iter()
            .filter(|sp| !sp.is_background)
            .map(|sp| sp.peak)
            .collect()
    }

    pub fn retained_count(&self) -> usize {
        self.scored.iter().filter(|sp| !sp.is_background).count()
    }

    pub fn removed_count(&self) -> usize {
        self.len() - self.retained_count()
    }

    /// Number of sample peaks considered.
    pub fn len(&self) -> usize {
        self.scored.len()
    }

    /// Whether the sample list was empty.
    pub fn is_empty(&self) -> bool {
        self.scored.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome() -> FilterOutcome {
        FilterOutcome {
            scored: vec![
                ScoredPeak { peak: Peak::new(300.0, 10.0), is_background: false },
                ScoredPeak { peak: Peak::new(100.0, 20.0), is_background: true },
                ScoredPeak { peak: Peak::new(200.0, 30.0), is_background: false },
            ],
            tolerance_ppm: 5.0,
        }
    }

    #[test]
    fn retained_and_removed_partition_in_order() {
        let outcome = outcome();
        let retained: Vec<_> = outcome.retained().copied().collect();
        let removed: Vec<_> = outcome.removed().copied().collect();

        assert_eq!(retained, vec![Peak::new(300.0, 10.0), Peak::new(200.0, 30.0)]);
        assert_eq!(removed, vec![Peak::new(100.0, 20.0)]);
        assert_eq!(outcome.retained_count(), 2);
        assert_eq!(outcome.removed_count(), 1);
        assert_eq!(outcome.len(), 3);
        assert_eq!(outcome.into_retained(), retained);
    }

    #[test]
    fn list_kind_display() {
        assert_eq!(PeakListKind::Sample.to_string(), "sample");
        assert_eq!(PeakListKind::Background.to_string(), "background");
    }
}
