//! Service-area polygon construction and point containment.

use geo::{Contains, Coord, LineString, Point, Polygon};

use crate::error::Error;

/// A closed planar polygon in decimal degrees, queried per record.
///
/// Containment is interior-only: a point exactly on an edge or vertex of
/// the ring is not inside. Latitude/longitude are treated as planar
/// Cartesian coordinates, which is adequate for a city-scale fence.
#[derive(Debug, Clone)]
pub struct Fence {
    polygon: Polygon<f64>,
}

impl Fence {
    /// Build a fence from `(latitude, longitude)` vertex pairs.
    ///
    /// The ring is closed automatically when the first vertex does not
    /// equal the last. Fewer than 3 distinct ring positions, or any
    /// non-finite coordinate, is rejected.
    pub fn from_vertices(vertices: &[(f64, f64)]) -> Result<Self, Error> {
        if vertices.len() < 3 {
            return Err(Error::InvalidGeometry(format!(
                "need at least 3 vertices, got {}",
                vertices.len()
            )));
        }

        for &(lat, lon) in vertices {
            if !lat.is_finite() || !lon.is_finite() {
                return Err(Error::InvalidGeometry(format!(
                    "non-finite vertex coordinate ({lat}, {lon})"
                )));
            }
        }

        let mut ring: Vec<Coord<f64>> = vertices
            .iter()
            .map(|&(lat, lon)| Coord { x: lon, y: lat })
            .collect();

        // Close the ring if needed
        if ring.first() != ring.last() {
            ring.push(ring[0]);
        }

        if ring.len() < 4 {
            return Err(Error::InvalidGeometry(
                "ring collapses to fewer than 3 positions".to_string(),
            ));
        }

        Ok(Self {
            polygon: Polygon::new(LineString::new(ring), vec![]),
        })
    }

    /// True iff the point lies strictly inside the fence.
    ///
    /// Non-finite coordinates never match.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        if !lat.is_finite() || !lon.is_finite() {
            return false;
        }
        self.polygon.contains(&Point::new(lon, lat))
    }

    /// Number of ring positions, first/last closing vertex counted once.
    pub fn vertex_count(&self) -> usize {
        self.polygon.exterior().0.len().saturating_sub(1)
    }
}

/// The default delivery service area: central Riyadh.
pub fn service_area() -> Fence {
    // (latitude, longitude) pairs
    let vertices = [
        (24.63985406962385, 46.68906593466065),
        (24.63453280031659, 46.68947449339325),
        (24.628838037792647, 46.694243487629876),
        (24.63032423881552, 46.7040574679983),
        (24.63565097172031, 46.714005379424094),
        (24.640483153282275, 46.71400825421935),
        (24.644446869224723, 46.71291701349901),
        (24.649026826111225, 46.7026927552042),
        (24.647529866448252, 46.69560264710353),
        (24.63985406962385, 46.68906593466065),
    ];
    Fence::from_vertices(&vertices).expect("default service area is well-formed")
}
