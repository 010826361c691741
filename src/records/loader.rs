//! CSV record source.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use tracing::info;

use crate::error::Error;

/// Required coordinate column names, matched case-sensitively.
pub const LAT_COLUMN: &str = "Latitude";
pub const LON_COLUMN: &str = "Longitude";

/// An input file loaded whole: header plus rows in file order.
///
/// Columns other than the two coordinate columns are opaque payload and
/// pass through the pipeline untouched.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub headers: StringRecord,
    pub rows: Vec<StringRecord>,
    /// Index of the Latitude column within each row.
    pub lat_idx: usize,
    /// Index of the Longitude column within each row.
    pub lon_idx: usize,
}

/// Read a comma-separated UTF-8 file with a header row into memory.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open input file {}", path.display()))?;

    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = csv_reader
        .headers()
        .with_context(|| format!("Failed to read header row of {}", path.display()))?
        .clone();

    // Find column indices
    let lat_idx = headers
        .iter()
        .position(|h| h == LAT_COLUMN)
        .ok_or(Error::MissingColumn(LAT_COLUMN))?;
    let lon_idx = headers
        .iter()
        .position(|h| h == LON_COLUMN)
        .ok_or(Error::MissingColumn(LON_COLUMN))?;

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result.with_context(|| format!("Failed to read {}", path.display()))?;
        rows.push(record);
    }

    info!("Loaded {} records from {}", rows.len(), path.display());

    Ok(Dataset {
        headers,
        rows,
        lat_idx,
        lon_idx,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_preserves_order_and_columns() {
        let file = write_fixture(
            "OrderId,Latitude,Longitude,Status\n\
             17,0.5,0.5,pending\n\
             18,2.0,2.0,shipped\n",
        );
        let dataset = load_records(file.path()).unwrap();
        assert_eq!(dataset.lat_idx, 1);
        assert_eq!(dataset.lon_idx, 2);
        assert_eq!(dataset.rows.len(), 2);
        assert_eq!(&dataset.rows[0][0], "17");
        assert_eq!(&dataset.rows[1][3], "shipped");
    }

    #[test]
    fn test_missing_longitude_column_fails() {
        let file = write_fixture("OrderId,Latitude\n17,0.5\n");
        let err = load_records(file.path()).unwrap_err();
        let err = err.downcast::<Error>().unwrap();
        assert!(matches!(err, Error::MissingColumn(LON_COLUMN)));
    }

    #[test]
    fn test_column_match_is_case_sensitive() {
        let file = write_fixture("latitude,longitude\n0.5,0.5\n");
        assert!(load_records(file.path()).is_err());
    }

    #[test]
    fn test_header_only_file_loads_empty() {
        let file = write_fixture("Latitude,Longitude\n");
        let dataset = load_records(file.path()).unwrap();
        assert!(dataset.rows.is_empty());
    }

    #[test]
    fn test_missing_file_fails() {
        assert!(load_records("/nonexistent/order_loc.csv").is_err());
    }
}
