use super::matcher::{BackgroundIndex, DEFAULT_TOLERANCE_PPM};
use super::model::{FilterOutcome, Peak, ScoredPeak};
use super::parser::{ParseError, parse_background_mz, parse_sample_peaks};

// ---------------------------------------------------------------------------
// Background subtraction
// ---------------------------------------------------------------------------

/// Remove every sample peak within 5 ppm of a background peak.
///
/// Returns the surviving `(m/z, intensity)` pairs in input order.
pub fn filter(sample_text: &str, background_text: &str) -> Result<Vec<Peak>, ParseError> {
    filter_with_tolerance(sample_text, background_text, DEFAULT_TOLERANCE_PPM)
}

/// [`filter`] with an explicit tolerance in ppm of the sample m/z.
pub fn filter_with_tolerance(
    sample_text: &str,
    background_text: &str,
    ppm: f64,
) -> Result<Vec<Peak>, ParseError> {
    Ok(run(sample_text, background_text, ppm)?.into_retained())
}

/// Parse both lists and flag every sample peak. Parsing is all-or-nothing.
pub fn run(sample_text: &str, background_text: &str, ppm: f64) -> Result<FilterOutcome, ParseError> {
    let sample = parse_sample_peaks(sample_text)?;
    let background = parse_background_mz(background_text)?;
    Ok(classify(sample, &background, ppm))
}

/// Flag each sample peak that lies within `ppm` of any background m/z.
pub fn classify(sample: Vec<Peak>, background: &[f64], ppm: f64) -> FilterOutcome {
    let index = BackgroundIndex::new(background);
    let scored = sample
        .into_iter()
        .map(|peak| ScoredPeak {
            is_background: index.contains_within(peak.mz, ppm),
            peak,
        })
        .collect();
    FilterOutcome {
        scored,
        tolerance_ppm: ppm,
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::data::model::PeakListKind;

    #[test]
    fn empty_background_keeps_everything() {
        let peaks = filter("300 10\n100 20\n200 30", "").unwrap();
        assert_eq!(
            peaks,
            vec![Peak::new(300.0, 10.0), Peak::new(100.0, 20.0), Peak::new(200.0, 30.0)]
        );
    }

    #[test]
    fn exact_duplicate_is_removed() {
        assert!(filter("100.0 50", "100.0").unwrap().is_empty());
    }

    #[test]
    fn boundary_is_removed_and_just_outside_is_kept() {
        assert!(filter("1000.0 1", "1000.005").unwrap().is_empty());
        assert_eq!(filter("1000.0 1", "1000.0051").unwrap(), vec![Peak::new(1000.0, 1.0)]);
    }

    #[test]
    fn mixed_lists() {
        let sample = indoc! {"
            500.001 1200
            550.0   300   ignored
            600.002 1100
            700.003 900
        "};
        let background = indoc! {"
            600.0041 80
            700.003
            900.0 5
        "};
        let peaks = filter(sample, background).unwrap();
        assert_eq!(peaks, vec![Peak::new(500.001, 1200.0), Peak::new(550.0, 300.0)]);
    }

    #[test]
    fn tolerance_is_configurable() {
        let sample = "600.002 1100";
        let background = "600.0041";
        // 2.1e-3 apart: outside 3 ppm (1.8e-3), inside 5 ppm (3.0e-3).
        assert_eq!(filter_with_tolerance(sample, background, 3.0).unwrap().len(), 1);
        assert!(filter_with_tolerance(sample, background, 5.0).unwrap().is_empty());
    }

    #[test]
    fn filtering_twice_is_a_fixed_point() {
        let sample = "100.0 1\n100.0004 2\n100.0006 3\n250.5 4\n999.9 5";
        let background = "100.0002\n999.9049";
        let once = filter(sample, background).unwrap();
        let text: String = once.iter().map(|p| format!("{} {}\n", p.mz, p.intensity)).collect();
        let twice = filter(&text, background).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn classify_keeps_match_flags() {
        let outcome = classify(
            vec![Peak::new(100.0, 1.0), Peak::new(200.0, 2.0)],
            &[200.0],
            5.0,
        );
        assert_eq!(outcome.tolerance_ppm, 5.0);
        assert!(!outcome.scored[0].is_background);
        assert!(outcome.scored[1].is_background);
        assert_eq!(outcome.removed_count(), 1);
    }

    #[test]
    fn parse_errors_surface() {
        let err = filter("100 1\nfoo 2", "100").unwrap_err();
        assert_eq!(err.kind, PeakListKind::Sample);
        assert_eq!(err.line, 2);

        let err = filter("100 1", "100\n\nbar").unwrap_err();
        assert_eq!(err.kind, PeakListKind::Background);
        assert_eq!(err.line, 3);
    }
}
