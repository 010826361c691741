//! Error kinds for the filter pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The fence polygon cannot be built into a valid closed ring.
    #[error("invalid fence geometry: {0}")]
    InvalidGeometry(String),

    /// A required coordinate column is absent from the input header.
    #[error("input is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A row's coordinate field is not a decimal number.
    #[error("row {row}: cannot parse {column} value '{value}' as decimal degrees")]
    BadCoordinate {
        row: usize,
        column: &'static str,
        value: String,
    },
}
