//! # Geometry Source Documents
//!
//! Serde form of a provider, loaded from YAML or JSON:
//!
//! ```yaml
//! provider: table
//! regions:
//!   - { name: Thailand, lat: 15.1, lon: 101.0 }
//!   - { name: Laos, lat: 18.5, lon: 103.8 }
//! neighbors:
//!   - [Thailand, Laos]
//! ```
//!
//! ```yaml
//! provider: polygons
//! tolerance_deg: 1.0e-9
//! regions:
//!   - name: A
//!     rings: [[[0, 0], [1, 0], [1, 1], [0, 1]]]
//! ```

use regnet_core::{Coordinate, RegionName};
use serde::{Deserialize, Serialize};

use crate::boundary::{Boundary, Point};
use crate::error::GeometryError;
use crate::polygon::{PolygonProvider, PolygonRegion, DEFAULT_TOUCH_TOLERANCE_DEG};
use crate::provider::{GeometryProvider, RegionFeature};
use crate::table::AdjacencyTableProvider;

/// A region row in a table source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableRegionSpec {
    pub name: RegionName,
    pub lat: f64,
    pub lon: f64,
}

/// A region in a polygon source. Rings are lists of `[lon, lat]` points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolygonRegionSpec {
    pub name: RegionName,
    pub rings: Vec<Vec<Point>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centroid: Option<Coordinate>,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOUCH_TOLERANCE_DEG
}

/// A provider definition, tagged by `provider`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum GeometrySource {
    Table {
        regions: Vec<TableRegionSpec>,
        #[serde(default)]
        neighbors: Vec<[RegionName; 2]>,
    },
    Polygons {
        #[serde(default = "default_tolerance")]
        tolerance_deg: f64,
        regions: Vec<PolygonRegionSpec>,
    },
}

impl GeometrySource {
    /// Number of regions the source declares.
    pub fn region_count(&self) -> usize {
        match self {
            GeometrySource::Table { regions, .. } => regions.len(),
            GeometrySource::Polygons { regions, .. } => regions.len(),
        }
    }

    /// Validate the document and build the provider it describes.
    pub fn into_provider(self) -> Result<Box<dyn GeometryProvider>, GeometryError> {
        match self {
            GeometrySource::Table { regions, neighbors } => {
                let features = regions
                    .into_iter()
                    .map(|r| -> Result<RegionFeature, GeometryError> {
                        Ok(RegionFeature::new(r.name, Coordinate::new(r.lat, r.lon)?))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                let pairs = neighbors.into_iter().map(|[a, b]| (a, b)).collect();
                Ok(Box::new(AdjacencyTableProvider::new(features, pairs)?))
            }
            GeometrySource::Polygons {
                tolerance_deg,
                regions,
            } => {
                let regions = regions
                    .into_iter()
                    .map(|spec| -> Result<PolygonRegion, GeometryError> {
                        let boundary = Boundary::new(spec.rings).map_err(|reason| {
                            GeometryError::DegenerateBoundary {
                                region: spec.name.to_string(),
                                reason,
                            }
                        })?;
                        let region = PolygonRegion::new(spec.name, boundary);
                        Ok(match spec.centroid {
                            Some(c) => region.with_centroid(c),
                            None => region,
                        })
                    })
                    .collect::<Result<Vec<_>, GeometryError>>()?;
                Ok(Box::new(PolygonProvider::new(regions, tolerance_deg)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
provider: table
regions:
  - { name: Thailand, lat: 15.1, lon: 101.0 }
  - { name: Laos, lat: 18.5, lon: 103.8 }
  - { name: Cambodia, lat: 12.7, lon: 104.9 }
neighbors:
  - [Thailand, Laos]
  - [Cambodia, Thailand]
"#;

    const POLYGONS: &str = r#"
provider: polygons
regions:
  - name: A
    rings: [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]]
  - name: B
    rings: [[[1, 0], [2, 0], [2, 1], [1, 1]]]
"#;

    fn name(s: &str) -> RegionName {
        RegionName::new(s).unwrap()
    }

    #[test]
    fn table_source_builds_provider() {
        let source: GeometrySource = serde_yaml::from_str(TABLE).unwrap();
        assert_eq!(source.region_count(), 3);
        let provider = source.into_provider().unwrap();
        assert_eq!(provider.features().len(), 3);
        assert!(provider.touches(&name("Laos"), &name("Thailand")));
        assert!(!provider.touches(&name("Laos"), &name("Cambodia")));
    }

    #[test]
    fn polygon_source_builds_provider() {
        let source: GeometrySource = serde_yaml::from_str(POLYGONS).unwrap();
        match &source {
            GeometrySource::Polygons { tolerance_deg, .. } => {
                assert_eq!(*tolerance_deg, DEFAULT_TOUCH_TOLERANCE_DEG)
            }
            other => panic!("unexpected source: {other:?}"),
        }
        let provider = source.into_provider().unwrap();
        assert!(provider.touches(&name("A"), &name("B")));
        assert_eq!(provider.features()[0].centroid.lon(), 0.5);
    }

    #[test]
    fn invalid_coordinate_is_reported() {
        let yaml = "provider: table\nregions:\n  - { name: X, lat: 95.0, lon: 0.0 }\n";
        let source: GeometrySource = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(
            source.into_provider(),
            Err(GeometryError::Coordinate(_))
        ));
    }

    #[test]
    fn degenerate_ring_names_the_region() {
        let yaml = "provider: polygons\nregions:\n  - { name: Sliver, rings: [[[0, 0], [1, 1]]] }\n";
        let source: GeometrySource = serde_yaml::from_str(yaml).unwrap();
        match source.into_provider() {
            Err(GeometryError::DegenerateBoundary { region, .. }) => assert_eq!(region, "Sliver"),
            other => panic!("unexpected result: {:?}", other.map(|p| p.features().len())),
        }
    }

    #[test]
    fn unknown_provider_tag_is_rejected() {
        assert!(serde_yaml::from_str::<GeometrySource>("provider: shapefile\nregions: []\n").is_err());
    }

    #[test]
    fn empty_region_name_is_rejected() {
        let yaml = "provider: table\nregions:\n  - { name: '  ', lat: 0.0, lon: 0.0 }\n";
        assert!(serde_yaml::from_str::<GeometrySource>(yaml).is_err());
    }
}
