//! Fence geometry: the service-area polygon and its containment test.

mod boundary;

pub use boundary::{service_area, Fence};
