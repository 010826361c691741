//! The filter pipeline: load, filter, write, summarize.
//!
//! Straight-line and single-threaded; a failure at any stage aborts the
//! run before the output file is published.

use std::path::Path;

use anyhow::Result;
use csv::StringRecord;
use tracing::{info, warn};

use crate::error::Error;
use crate::fence::Fence;
use crate::records::{load_records, write_records, Dataset, LAT_COLUMN, LON_COLUMN};

/// How to treat rows whose coordinate fields do not parse as numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Fail the whole run on the first unparseable coordinate (default).
    Strict,
    /// Drop the offending row with a warning and continue.
    Lenient,
}

/// Counts reported to the operator after a successful run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub total: usize,
    pub kept: usize,
    /// Rows dropped by the lenient malformed-coordinate policy. Always 0
    /// under the strict policy.
    pub skipped: usize,
}

/// Evaluate the fence against every row, in input order.
///
/// Coordinates that parse to a non-finite value (NaN, inf) fail the
/// containment test and are excluded under either policy.
pub fn filter_rows(
    dataset: &Dataset,
    fence: &Fence,
    policy: MalformedPolicy,
) -> Result<(Vec<StringRecord>, usize), Error> {
    let mut kept = Vec::new();
    let mut skipped = 0;

    for (i, row) in dataset.rows.iter().enumerate() {
        // Header is line 1, so data rows start at line 2
        let line = i + 2;

        let lat = match parse_coord(row, dataset.lat_idx, LAT_COLUMN, line, policy)? {
            Some(v) => v,
            None => {
                skipped += 1;
                continue;
            }
        };
        let lon = match parse_coord(row, dataset.lon_idx, LON_COLUMN, line, policy)? {
            Some(v) => v,
            None => {
                skipped += 1;
                continue;
            }
        };

        if fence.contains(lat, lon) {
            kept.push(row.clone());
        }
    }

    Ok((kept, skipped))
}

fn parse_coord(
    row: &StringRecord,
    idx: usize,
    column: &'static str,
    line: usize,
    policy: MalformedPolicy,
) -> Result<Option<f64>, Error> {
    let value = row.get(idx).unwrap_or("");
    match value.parse::<f64>() {
        Ok(v) => Ok(Some(v)),
        Err(_) => match policy {
            MalformedPolicy::Strict => Err(Error::BadCoordinate {
                row: line,
                column,
                value: value.to_string(),
            }),
            MalformedPolicy::Lenient => {
                warn!("Skipping row {}: {} value '{}' is not numeric", line, column, value);
                Ok(None)
            }
        },
    }
}

/// Run the whole pipeline: load the input, filter against the fence,
/// publish the output, and return the counts for reporting.
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    fence: &Fence,
    policy: MalformedPolicy,
) -> Result<RunSummary> {
    let dataset = load_records(input)?;
    let total = dataset.rows.len();

    let (kept_rows, skipped) = filter_rows(&dataset, fence, policy)?;
    info!(
        "Fence kept {} of {} records ({} skipped as malformed)",
        kept_rows.len(),
        total,
        skipped
    );

    write_records(output, &dataset.headers, &kept_rows)?;

    Ok(RunSummary {
        total,
        kept: kept_rows.len(),
        skipped,
    })
}
