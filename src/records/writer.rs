//! CSV record sink with atomic publish.

use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;
use tempfile::NamedTempFile;
use tracing::info;

/// Write header and rows to `path`, overwriting any existing file.
///
/// Rows are staged in a temporary file in the destination directory and
/// renamed into place on success, so a failed run never leaves a
/// half-written output at the target path.
pub fn write_records<P: AsRef<Path>>(
    path: P,
    headers: &StringRecord,
    rows: &[StringRecord],
) -> Result<()> {
    let path = path.as_ref();
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());

    let staged = match dir {
        Some(dir) => NamedTempFile::new_in(dir),
        None => NamedTempFile::new_in("."),
    }
    .context("Failed to create staging file for output")?;

    let mut csv_writer = csv::Writer::from_writer(staged);
    csv_writer
        .write_record(headers)
        .context("Failed to write output header")?;
    for row in rows {
        csv_writer.write_record(row).context("Failed to write output row")?;
    }

    let staged = csv_writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush output: {}", e.error()))?;
    staged
        .persist(path)
        .with_context(|| format!("Failed to publish output file {}", path.display()))?;

    info!("Wrote {} records to {}", rows.len(), path.display());
    Ok(())
}
