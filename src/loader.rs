use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim};

use crate::error::DatasetError;
use crate::record::{CapitalRecord, Dataset};

const FIELD_COUNT: usize = 6;

/// What to do with a line that does not describe a capital.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Skip it, count it, keep going.
    #[default]
    Skip,
    /// Stop at the first bad line.
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

pub fn load_from_path<P: AsRef<Path>>(
    path: P,
    policy: LoadPolicy,
) -> Result<(Dataset, LoadReport), DatasetError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let (dataset, report) = load_from_reader(file, policy)?;
    tracing::info!(
        path = %path.display(),
        loaded = report.loaded,
        skipped = report.skipped,
        "loaded capitals"
    );
    Ok((dataset, report))
}

/// Loads `path` for a front end, warning when lines were dropped.
pub fn load_dataset<P: AsRef<Path>>(path: P, policy: LoadPolicy) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let (dataset, report) = load_from_path(path, policy)?;
    if report.skipped > 0 {
        tracing::warn!(skipped = report.skipped, "ignored malformed lines in {}", path.display());
    }
    Ok(dataset)
}

/// Parses `CountryName,CapitalName,Latitude,Longitude,CountryCode,Continent`
/// lines. There is no header and no quoting; fields are trimmed and blank
/// lines ignored.
pub fn load_from_reader<R: Read>(
    reader: R,
    policy: LoadPolicy,
) -> Result<(Dataset, LoadReport), DatasetError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut report = LoadReport::default();

    // Byte records, so a line with invalid UTF-8 is malformed rather than fatal.
    for result in rdr.byte_records() {
        let raw = result?;
        if is_blank(&raw) {
            continue;
        }
        let line = raw.position().map(|p| p.line()).unwrap_or(0);
        match parse_record(&raw) {
            Ok(record) => records.push(record),
            Err(reason) => match policy {
                LoadPolicy::Skip => {
                    tracing::debug!(line, %reason, "skipping line");
                    report.skipped += 1;
                }
                LoadPolicy::Strict => return Err(DatasetError::Malformed { line, reason }),
            },
        }
    }

    report.loaded = records.len();
    Ok((Dataset::from(records), report))
}

fn is_blank(raw: &ByteRecord) -> bool {
    raw.len() == 1 && raw[0].is_empty()
}

fn parse_record(raw: &ByteRecord) -> Result<CapitalRecord, String> {
    let raw = StringRecord::from_byte_record(raw.clone()).map_err(|e| e.to_string())?;
    if raw.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            raw.len()
        ));
    }
    let record: CapitalRecord = raw.deserialize(None).map_err(|e| e.to_string())?;
    if !record.latitude.is_finite() || !record.longitude.is_finite() {
        return Err(String::from("coordinates must be finite"));
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
France,Paris,48.8566,2.3522,FR,Europe
Germany,Berlin,52.52,13.405,DE,Europe

Japan,Tokyo,35.6762,139.6503,JP,Asia
";

    #[test]
    fn loads_well_formed_lines_in_order() {
        let (dataset, report) = load_from_reader(SAMPLE.as_bytes(), LoadPolicy::Skip).unwrap();
        assert_eq!(report, LoadReport { loaded: 3, skipped: 0 });
        let names: Vec<&str> = dataset.iter().map(|r| r.capital_name.as_str()).collect();
        assert_eq!(names, vec!["Paris", "Berlin", "Tokyo"]);
        assert_eq!(
            dataset.records()[0],
            CapitalRecord::new("France", "Paris", 48.8566, 2.3522, "FR", "Europe")
        );
    }

    #[test]
    fn skips_wrong_field_counts_and_bad_coordinates() {
        let input = "\
France,Paris,48.8566,2.3522,FR,Europe
Nowhere,Atlantis,1.0,2.0,XX
Bad,Coords,north,2.0,BC,Europe
\x20\x20\x20
Infinite,Loop,inf,2.0,IL,Europe

Germany,Berlin,52.52,13.405,DE,Europe,extra
Japan,Tokyo,35.6762,139.6503,JP,Asia
";
        let (dataset, report) = load_from_reader(input.as_bytes(), LoadPolicy::Skip).unwrap();
        assert_eq!(report, LoadReport { loaded: 2, skipped: 4 });
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1].capital_name, "Tokyo");
    }

    #[test]
    fn invalid_utf8_line_is_skipped() {
        let input: &[u8] = b"France,Paris,48.8566,2.3522,FR,Europe
Bad\xff,Nowhere,1.0,2.0,XX,Europe
Japan,Tokyo,35.6762,139.6503,JP,Asia
";
        let (dataset, report) = load_from_reader(input, LoadPolicy::Skip).unwrap();
        assert_eq!(report, LoadReport { loaded: 2, skipped: 1 });
        assert_eq!(dataset.records()[1].capital_name, "Tokyo");

        match load_from_reader(input, LoadPolicy::Strict) {
            Err(DatasetError::Malformed { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected a malformed line error, got {:?}", other),
        }
    }

    #[test]
    fn load_dataset_keeps_good_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"France,Paris,48.8566,2.3522,FR,Europe\nNowhere,Atlantis\n").unwrap();
        let dataset = load_dataset(file.path(), LoadPolicy::Skip).unwrap();
        assert_eq!(dataset.len(), 1);
        assert!(matches!(
            load_dataset(file.path(), LoadPolicy::Strict),
            Err(DatasetError::Malformed { line: 2, .. })
        ));
    }

    #[test]
    fn trims_whitespace_around_fields() {
        let input = "  France , Paris , 48.8566 , 2.3522 , FR , Europe  \r\n";
        let (dataset, _) = load_from_reader(input.as_bytes(), LoadPolicy::Skip).unwrap();
        assert_eq!(dataset.records()[0].capital_name, "Paris");
        assert_eq!(dataset.records()[0].continent_name, "Europe");
        assert_eq!(dataset.records()[0].latitude, 48.8566);
    }

    #[test]
    fn strict_policy_reports_the_first_bad_line() {
        let input = "\
France,Paris,48.8566,2.3522,FR,Europe
Nowhere,Atlantis,1.0,2.0,XX
";
        match load_from_reader(input.as_bytes(), LoadPolicy::Strict) {
            Err(DatasetError::Malformed { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("found 5"), "reason was {}", reason);
            }
            other => panic!("expected a malformed line error, got {:?}", other),
        }
    }

    #[test]
    fn empty_input_is_an_empty_dataset() {
        let (dataset, report) = load_from_reader("".as_bytes(), LoadPolicy::Strict).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(report, LoadReport::default());
    }

    #[test]
    fn loads_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let (dataset, report) = load_from_path(file.path(), LoadPolicy::Skip).unwrap();
        assert_eq!(report.loaded, 3);
        assert_eq!(dataset.records()[2].country_code, "JP");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_path(dir.path().join("absent.txt"), LoadPolicy::Skip).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
