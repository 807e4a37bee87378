//! Export of joined records as CSV
//!
//! The export uses the joined column set
//! (`State,Crop,Year,Production,Rainfall (mm)`) and can be read back with
//! [`read_joined_csv`].

use std::io::{Read, Write};

use csv::{ReaderBuilder, Trim, WriterBuilder};

use crate::error::{Error, Result};
use crate::models::JoinedRecord;

/// Header row of the exported file
pub const EXPORT_HEADER: [&str; 5] = ["State", "Crop", "Year", "Production", "Rainfall (mm)"];

/// File name for a (state, crop) export, e.g. `AgriInsight_Punjab_Wheat.csv`
///
/// Path separators in either component become `_` so the name stays a single
/// path segment.
pub fn export_file_name(state: &str, crop: &str) -> String {
    format!(
        "AgriInsight_{}_{}.csv",
        sanitize_component(state),
        sanitize_component(crop)
    )
}

fn sanitize_component(s: &str) -> String {
    s.chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect()
}

/// Write joined records as CSV (with header) to `writer`
pub fn write_joined_csv<W: Write>(writer: W, records: &[JoinedRecord]) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    // Written explicitly so an empty export still carries the header
    wtr.write_record(EXPORT_HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Export joined records to a CSV string
pub fn export_joined_csv(records: &[JoinedRecord]) -> Result<String> {
    let mut buf = Vec::new();
    write_joined_csv(&mut buf, records)?;
    String::from_utf8(buf).map_err(|e| Error::InvalidData(format!("Export is not UTF-8: {}", e)))
}

/// Parse a previously exported CSV back into joined records
pub fn read_joined_csv<R: Read>(reader: R) -> Result<Vec<JoinedRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        records.push(result?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join::filter_and_join;
    use crate::test_utils::sample_dataset;

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name("Punjab", "Wheat"),
            "AgriInsight_Punjab_Wheat.csv"
        );
        assert_eq!(
            export_file_name("Uttar Pradesh", "Rice"),
            "AgriInsight_Uttar Pradesh_Rice.csv"
        );
        assert_eq!(
            export_file_name("A/B", "C\\D"),
            "AgriInsight_A_B_C_D.csv"
        );
    }

    #[test]
    fn test_export_header_and_rows() {
        let ds = sample_dataset();
        let joined = filter_and_join(&ds.production, &ds.rainfall, "Punjab", "Rice");
        let csv = export_joined_csv(&joined).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "State,Crop,Year,Production,Rainfall (mm)");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Punjab,Rice,2018,"));
    }

    #[test]
    fn test_export_empty_keeps_header() {
        let csv = export_joined_csv(&[]).unwrap();
        assert_eq!(csv.trim_end(), "State,Crop,Year,Production,Rainfall (mm)");
    }

    #[test]
    fn test_export_reparses_to_same_rows() {
        let ds = sample_dataset();
        let mut joined = filter_and_join(&ds.production, &ds.rainfall, "Punjab", "Wheat");
        joined[0].state = "Punjab, North".to_string();
        joined[1].production = 1234.5678;

        let csv = export_joined_csv(&joined).unwrap();
        let parsed = read_joined_csv(csv.as_bytes()).unwrap();
        assert_eq!(parsed, joined);
    }

    #[test]
    fn test_export_is_utf8_for_hindi_names() {
        let ds = sample_dataset();
        let mut joined = filter_and_join(&ds.production, &ds.rainfall, "Kerala", "Rice");
        joined[0].crop = "धान".to_string();
        let csv = export_joined_csv(&joined).unwrap();
        assert!(csv.contains("धान"));
        assert_eq!(read_joined_csv(csv.as_bytes()).unwrap(), joined);
    }
}
