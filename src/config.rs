//! Fence boundary configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::fence::Fence;

#[derive(Debug, Deserialize, Clone)]
pub struct BoundaryConfig {
    pub fence: FenceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FenceConfig {
    pub name: String,
    /// Ordered `[latitude, longitude]` vertex pairs in decimal degrees.
    pub vertices: Vec<[f64; 2]>,
}

impl BoundaryConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read boundary file")?;
        let config: BoundaryConfig =
            toml::from_str(&content).context("Failed to parse boundary file")?;
        Ok(config)
    }

    pub fn build_fence(&self) -> Result<Fence> {
        let vertices: Vec<(f64, f64)> =
            self.fence.vertices.iter().map(|v| (v[0], v[1])).collect();
        let fence = Fence::from_vertices(&vertices)
            .with_context(|| format!("Boundary '{}' is not a usable fence", self.fence.name))?;
        Ok(fence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_and_build_fence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[fence]\n\
             name = \"unit-square\"\n\
             vertices = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]\n"
        )
        .unwrap();

        let config = BoundaryConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.fence.name, "unit-square");
        let fence = config.build_fence().unwrap();
        assert!(fence.contains(0.5, 0.5));
        assert!(!fence.contains(2.0, 2.0));
    }

    #[test]
    fn test_degenerate_boundary_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[fence]\nname = \"line\"\nvertices = [[0.0, 0.0], [1.0, 1.0]]\n"
        )
        .unwrap();

        let config = BoundaryConfig::load_from_file(file.path()).unwrap();
        assert!(config.build_fence().is_err());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not toml at all [").unwrap();
        assert!(BoundaryConfig::load_from_file(file.path()).is_err());
    }
}
