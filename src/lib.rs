//! Palisade - a geofence batch filter for tabular point data
//!
//! This library provides the fence geometry, record I/O, and filter pipeline
//! shared with the filter binary.

pub mod config;
pub mod error;
pub mod fence;
pub mod pipeline;
pub mod records;

pub use error::Error;
pub use fence::Fence;
pub use pipeline::{MalformedPolicy, RunSummary};
