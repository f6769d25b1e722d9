use std::path::Path;

use anyhow::{Context, Result};

use super::model::Peak;

/// File name offered when saving the filtered peaks.
pub const EXPORT_FILE_NAME: &str = "filtered_peaks.csv";

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// Serialise peaks as `m/z,Intensity` rows, header first.
pub fn to_csv_string(peaks: &[Peak]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_records(&mut writer, peaks)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .context("flushing CSV buffer")?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

/// Write peaks to `path` in the same layout as [`to_csv_string`].
pub fn write_csv(path: &Path, peaks: &[Peak]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    write_records(&mut writer, peaks)?;
    writer
        .flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn write_records<W: std::io::Write>(writer: &mut csv::Writer<W>, peaks: &[Peak]) -> Result<()> {
    // serialize() only emits the header together with the first record.
    if peaks.is_empty() {
        writer
            .write_record(["m/z", "Intensity"])
            .context("writing CSV header")?;
    }
    for (i, peak) in peaks.iter().enumerate() {
        writer
            .serialize(peak)
            .with_context(|| format!("writing CSV row {i}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn csv_has_header_and_rows_in_order() {
        let peaks = [Peak::new(300.0, 10.0), Peak::new(123.456, 78.9), Peak::new(-1.0, 0.5)];
        let csv = to_csv_string(&peaks).unwrap();
        assert_eq!(
            csv,
            indoc! {"
                m/z,Intensity
                300.0,10.0
                123.456,78.9
                -1.0,0.5
            "}
        );
    }

    #[test]
    fn empty_result_still_has_header() {
        assert_eq!(to_csv_string(&[]).unwrap(), "m/z,Intensity\n");
    }

    #[test]
    fn write_csv_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);
        let peaks = [Peak::new(500.001, 1200.0)];
        write_csv(&path, &peaks).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_csv_string(&peaks).unwrap());
        assert!(written.starts_with("m/z,Intensity\n500.001,1200.0"));
    }

    #[test]
    fn write_csv_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(EXPORT_FILE_NAME);
        let err = write_csv(&path, &[]).unwrap_err();
        assert!(format!("{err:#}").contains("creating"));
    }
}
