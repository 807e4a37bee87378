//! CSV loaders for the production and rainfall datasets
//!
//! Columns are located by header name, so extra columns and any column order
//! are accepted. A missing required column, an unparseable cell, or an
//! unreadable file is reported as [`Error::DataLoad`] naming the file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{Dataset, ProductionRecord, RainfallRecord, RAINFALL_COLUMN};

/// Required headers of `crop_production.csv`
pub const PRODUCTION_COLUMNS: [&str; 4] = ["State", "Crop", "Year", "Production"];

/// Required headers of `rainfall_data.csv`
pub const RAINFALL_COLUMNS: [&str; 3] = ["State", "Year", RAINFALL_COLUMN];

/// Load both datasets from disk
pub fn load(production_path: &Path, rainfall_path: &Path) -> Result<Dataset> {
    let production = load_production(production_path)?;
    let rainfall = load_rainfall(rainfall_path)?;

    info!(
        production_rows = production.len(),
        rainfall_rows = rainfall.len(),
        "Loaded datasets"
    );

    Ok(Dataset::new(production, rainfall))
}

/// Load `crop_production.csv`
pub fn load_production(path: &Path) -> Result<Vec<ProductionRecord>> {
    let file = open(path)?;
    parse_production(file, path)
}

/// Load `rainfall_data.csv`
pub fn load_rainfall(path: &Path) -> Result<Vec<RainfallRecord>> {
    let file = open(path)?;
    parse_rainfall(file, path)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| Error::data_load(path, format!("cannot open file: {}", e)))
}

/// Parse production rows; `source` is only used in error messages
pub fn parse_production<R: Read>(reader: R, source: &Path) -> Result<Vec<ProductionRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| Error::data_load(source, e.to_string()))?
        .clone();
    let [state_col, crop_col, year_col, production_col] =
        locate_columns(&headers, PRODUCTION_COLUMNS, source)?;

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result.map_err(|e| Error::data_load(source, e.to_string()))?;
        let cells = Cells::new(&row, source);

        records.push(ProductionRecord {
            state: cells.text(state_col, "State")?,
            crop: cells.text(crop_col, "Crop")?,
            year: cells.year(year_col)?,
            production: cells.number(production_col, "Production")?,
        });
    }

    debug!("Parsed {} production rows from {}", records.len(), source.display());
    Ok(records)
}

/// Parse rainfall rows; `source` is only used in error messages
pub fn parse_rainfall<R: Read>(reader: R, source: &Path) -> Result<Vec<RainfallRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| Error::data_load(source, e.to_string()))?
        .clone();
    let [state_col, year_col, rainfall_col] = locate_columns(&headers, RAINFALL_COLUMNS, source)?;

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result.map_err(|e| Error::data_load(source, e.to_string()))?;
        let cells = Cells::new(&row, source);

        records.push(RainfallRecord {
            state: cells.text(state_col, "State")?,
            year: cells.year(year_col)?,
            rainfall_mm: cells.number(rainfall_col, RAINFALL_COLUMN)?,
        });
    }

    debug!("Parsed {} rainfall rows from {}", records.len(), source.display());
    Ok(records)
}

/// Find the index of every required column, in the order given
fn locate_columns<const N: usize>(
    headers: &StringRecord,
    required: [&str; N],
    source: &Path,
) -> Result<[usize; N]> {
    let mut indices = [0usize; N];
    for (slot, name) in indices.iter_mut().zip(required) {
        *slot = headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| {
                Error::data_load(source, format!("missing required column '{}'", name))
            })?;
    }
    Ok(indices)
}

/// Cell accessors for one CSV row with row-aware error messages
struct Cells<'a> {
    row: &'a StringRecord,
    source: &'a Path,
}

impl<'a> Cells<'a> {
    fn new(row: &'a StringRecord, source: &'a Path) -> Self {
        Self { row, source }
    }

    fn line(&self) -> u64 {
        self.row.position().map(|p| p.line()).unwrap_or(0)
    }

    fn error(&self, column: &str, reason: impl std::fmt::Display) -> Error {
        Error::data_load(
            self.source,
            format!("line {}, column '{}': {}", self.line(), column, reason),
        )
    }

    fn raw(&self, idx: usize, column: &str) -> Result<&'a str> {
        match self.row.get(idx) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(self.error(column, "empty value")),
        }
    }

    fn text(&self, idx: usize, column: &str) -> Result<String> {
        self.raw(idx, column).map(str::to_string)
    }

    fn year(&self, idx: usize) -> Result<i32> {
        let raw = self.raw(idx, "Year")?;
        parse_year(raw).ok_or_else(|| self.error("Year", format!("invalid year '{}'", raw)))
    }

    fn number(&self, idx: usize, column: &str) -> Result<f64> {
        let raw = self.raw(idx, column)?;
        parse_number(raw).ok_or_else(|| self.error(column, format!("invalid number '{}'", raw)))
    }
}

/// Parse a year, tolerating a float rendering such as `2015.0`
fn parse_year(s: &str) -> Option<i32> {
    if let Ok(year) = s.parse::<i32>() {
        return Some(year);
    }
    let value = s.parse::<f64>().ok()?;
    if value.fract() == 0.0 && value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX) {
        Some(value as i32)
    } else {
        None
    }
}

/// Parse a measurement, accepting well-placed thousands separators (`1,234.5`)
fn parse_number(s: &str) -> Option<f64> {
    let value = if s.contains(',') {
        if !has_valid_grouping(s) {
            return None;
        }
        s.replace(',', "").parse::<f64>().ok()?
    } else {
        s.parse::<f64>().ok()?
    };
    value.is_finite().then_some(value)
}

/// Commas only in the integer part, splitting it into 1-3 digits then groups of 3
fn has_valid_grouping(s: &str) -> bool {
    let unsigned = s.strip_prefix(&['-', '+'][..]).unwrap_or(s);
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };
    if fraction.is_some_and(|f| f.contains(',')) {
        return false;
    }

    let mut groups = integer.split(',');
    let first_ok = groups
        .next()
        .is_some_and(|g| (1..=3).contains(&g.len()) && g.bytes().all(|b| b.is_ascii_digit()));
    first_ok && groups.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{write_fixture, PRODUCTION_CSV, RAINFALL_CSV};

    fn src() -> &'static Path {
        Path::new("test.csv")
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2013"), Some(2013));
        assert_eq!(parse_year("2013.0"), Some(2013));
        assert_eq!(parse_year("2013.5"), None);
        assert_eq!(parse_year("last year"), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1,234.5"), Some(1234.5));
        assert_eq!(parse_number("-12"), Some(-12.0));
        assert_eq!(parse_number("12,345,678"), Some(12345678.0));
        assert_eq!(parse_number("-1,000"), Some(-1000.0));
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("abc"), None);
    }

    #[test]
    fn test_parse_number_rejects_misplaced_separators() {
        assert_eq!(parse_number("1,2,3"), None);
        assert_eq!(parse_number("12,34"), None);
        assert_eq!(parse_number("1234,567"), None);
        assert_eq!(parse_number(",123"), None);
        assert_eq!(parse_number("1,234.5,6"), None);
        assert_eq!(parse_number("4 5"), None);
        assert_eq!(parse_number("1 234"), None);
    }

    #[test]
    fn test_malformed_measurements_fail_to_load() {
        for cell in ["\"1,2,3\"", "4 5"] {
            let csv = format!("State,Crop,Year,Production\nKerala,Rice,2020,{}\n", cell);
            let err = parse_production(csv.as_bytes(), src()).unwrap_err();
            match err {
                Error::DataLoad { reason, .. } => {
                    assert!(reason.contains("invalid number"), "{}", reason)
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn test_quoted_thousands_separator_loads() {
        let csv = "State,Crop,Year,Production\nKerala,Rice,2020,\"1,250.5\"\n";
        let records = parse_production(csv.as_bytes(), src()).unwrap();
        assert_eq!(records[0].production, 1250.5);
    }

    #[test]
    fn test_parse_production() {
        let records = parse_production(PRODUCTION_CSV.as_bytes(), src()).unwrap();
        assert_eq!(records.len(), 9);
        assert_eq!(records[0].state, "Punjab");
        assert_eq!(records[0].crop, "Wheat");
        assert_eq!(records[0].year, 2018);
        assert_eq!(records[0].production, 1000.0);
    }

    #[test]
    fn test_parse_rainfall() {
        let records = parse_rainfall(RAINFALL_CSV.as_bytes(), src()).unwrap();
        assert_eq!(records.len(), 7);
        assert_eq!(records[0].state, "Punjab");
        assert_eq!(records[0].rainfall_mm, 500.0);
    }

    #[test]
    fn test_columns_located_by_name() {
        let csv = "Production,Year,Extra,Crop,State\n42.5,2020,x,Rice,Kerala\n";
        let records = parse_production(csv.as_bytes(), src()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].state, "Kerala");
        assert_eq!(records[0].crop, "Rice");
        assert_eq!(records[0].production, 42.5);
    }

    #[test]
    fn test_missing_column_is_data_load_error() {
        let csv = "State,Year\nKerala,2020\n";
        let err = parse_rainfall(csv.as_bytes(), src()).unwrap_err();
        match err {
            Error::DataLoad { reason, .. } => assert!(reason.contains("Rainfall (mm)")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_number_is_data_load_error() {
        let csv = "State,Crop,Year,Production\nKerala,Rice,2020,lots\n";
        let err = parse_production(csv.as_bytes(), src()).unwrap_err();
        match err {
            Error::DataLoad { reason, .. } => {
                assert!(reason.contains("line 2"));
                assert!(reason.contains("Production"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_cell_is_data_load_error() {
        let csv = "State,Year,Rainfall (mm)\nKerala,,3000\n";
        assert!(matches!(
            parse_rainfall(csv.as_bytes(), src()),
            Err(Error::DataLoad { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        let err = load(&missing, &missing).unwrap_err();
        match err {
            Error::DataLoad { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let (production, rainfall) = write_fixture(dir.path());
        let dataset = load(&production, &rainfall).unwrap();
        assert_eq!(dataset.production.len(), 9);
        assert_eq!(dataset.rainfall.len(), 7);
    }
}
