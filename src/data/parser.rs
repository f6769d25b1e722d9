use std::fmt;
use std::num::ParseFloatError;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{Peak, PeakListKind};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// The numeric column a token was expected to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeakField {
    Mz,
    Intensity,
}

impl fmt::Display for PeakField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeakField::Mz => write!(f, "m/z"),
            PeakField::Intensity => write!(f, "intensity"),
        }
    }
}

/// A line had enough tokens but one of the required ones is not a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} peaks, line {line}: '{token}' is not a valid {field}")]
pub struct ParseError {
    pub kind: PeakListKind,
    /// 1-based line number in the pasted text.
    pub line: usize,
    pub field: PeakField,
    pub token: String,
    source: ParseFloatError,
}

fn parse_field(
    token: &str,
    kind: PeakListKind,
    line: usize,
    field: PeakField,
) -> Result<f64, ParseError> {
    token.parse::<f64>().map_err(|source| ParseError {
        kind,
        line,
        field,
        token: token.to_string(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Peak list parsing
// ---------------------------------------------------------------------------

/// Parse pasted sample peaks, one `<mz> <intensity> [ignored...]` per line.
///
/// Lines with fewer than two tokens are skipped. The first malformed number
/// aborts the whole parse.
pub fn parse_sample_peaks(text: &str) -> Result<Vec<Peak>, ParseError> {
    let mut peaks = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        let (Some(mz), Some(intensity)) = (tokens.next(), tokens.next()) else {
            continue;
        };
        let line_no = idx + 1;
        let mz = parse_field(mz, PeakListKind::Sample, line_no, PeakField::Mz)?;
        let intensity = parse_field(intensity, PeakListKind::Sample, line_no, PeakField::Intensity)?;
        peaks.push(Peak::new(mz, intensity));
    }
    log::debug!("Parsed {} sample peaks", peaks.len());
    Ok(peaks)
}

/// Parse pasted background peaks, one `<mz> [ignored...]` per line.
pub fn parse_background_mz(text: &str) -> Result<Vec<f64>, ParseError> {
    let mut mzs = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let Some(mz) = line.split_whitespace().next() else {
            continue;
        };
        mzs.push(parse_field(mz, PeakListKind::Background, idx + 1, PeakField::Mz)?);
    }
    log::debug!("Parsed {} background m/z values", mzs.len());
    Ok(mzs)
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

/// Read a peak list from a text file, as if it had been pasted.
pub fn read_peak_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading peak list {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use indoc::indoc;

    use super::*;

    #[test]
    fn sample_extra_columns_are_ignored() {
        let peaks = parse_sample_peaks("123.456   78.9   extra_token").unwrap();
        assert_eq!(peaks, vec![Peak::new(123.456, 78.9)]);
    }

    #[test]
    fn sample_blank_and_short_lines_are_skipped() {
        let text = indoc! {"
            500.001 1200

            600.002
               \t
            700.003 900 3
        "};
        let peaks = parse_sample_peaks(text).unwrap();
        assert_eq!(peaks, vec![Peak::new(500.001, 1200.0), Peak::new(700.003, 900.0)]);
    }

    #[test]
    fn sample_crlf_and_negative_values() {
        let peaks = parse_sample_peaks("-1.5 2\r\n0 -3e2\r\n").unwrap();
        assert_eq!(peaks, vec![Peak::new(-1.5, 2.0), Peak::new(0.0, -300.0)]);
    }

    #[test]
    fn sample_bad_intensity_reports_line_and_token() {
        let text = indoc! {"
            100.0 20

            200.0 lots
        "};
        let err = parse_sample_peaks(text).unwrap_err();
        assert_eq!(err.kind, PeakListKind::Sample);
        assert_eq!(err.line, 3);
        assert_eq!(err.field, PeakField::Intensity);
        assert_eq!(err.token, "lots");
        assert_eq!(err.to_string(), "sample peaks, line 3: 'lots' is not a valid intensity");
    }

    #[test]
    fn sample_bad_mz_is_checked_first() {
        let err = parse_sample_peaks("abc def").unwrap_err();
        assert_eq!(err.field, PeakField::Mz);
        assert_eq!(err.token, "abc");
    }

    #[test]
    fn background_takes_first_token() {
        let text = indoc! {"
            500.001 1200
            600.002

            700.003 900 note
            600.002
        "};
        let mzs = parse_background_mz(text).unwrap();
        assert_eq!(mzs, vec![500.001, 600.002, 700.003, 600.002]);
    }

    #[test]
    fn background_bad_token_fails_whole_parse() {
        let err = parse_background_mz("100.0\nm/z 5\n300.0").unwrap_err();
        assert_eq!(err.kind, PeakListKind::Background);
        assert_eq!(err.line, 2);
        assert_eq!(err.token, "m/z");
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(parse_sample_peaks("").unwrap().is_empty());
        assert!(parse_background_mz("  \n\n ").unwrap().is_empty());
    }

    #[test]
    fn read_peak_text_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "100.0 5\n200.0 6\n").unwrap();
        let text = read_peak_text(file.path()).unwrap();
        assert_eq!(parse_sample_peaks(&text).unwrap().len(), 2);
    }

    #[test]
    fn read_peak_text_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_peak_text(&dir.path().join("nope.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("reading peak list"));
    }
}
