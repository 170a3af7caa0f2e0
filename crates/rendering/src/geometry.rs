//! Base-map region polygons loaded from GeoJSON.
//!
//! Rings are stored already projected into unit Web-Mercator coordinates so
//! rasterization and hover hit-testing never touch trigonometry per frame.

use std::path::Path;

use bevy::prelude::*;
use geojson::{GeoJson, Value};

use climate::error::DataError;

use crate::projection::project;

/// A polygon as rings of projected points: exterior first, holes after.
pub type Polygon = Vec<Vec<[f64; 2]>>;

/// Axis-aligned bounds in projected coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl Bounds {
    pub const EMPTY: Bounds = Bounds {
        min: [f64::INFINITY, f64::INFINITY],
        max: [f64::NEG_INFINITY, f64::NEG_INFINITY],
    };

    pub fn include(&mut self, p: [f64; 2]) {
        self.min[0] = self.min[0].min(p[0]);
        self.min[1] = self.min[1].min(p[1]);
        self.max[0] = self.max[0].max(p[0]);
        self.max[1] = self.max[1].max(p[1]);
    }

    pub fn merge(&mut self, other: &Bounds) {
        self.include(other.min);
        self.include(other.max);
    }

    pub fn contains(&self, p: [f64; 2]) -> bool {
        p[0] >= self.min[0] && p[0] <= self.max[0] && p[1] >= self.min[1] && p[1] <= self.max[1]
    }

    pub fn is_empty(&self) -> bool {
        self.min[0] > self.max[0]
    }
}

/// One named region of the base map.
#[derive(Debug, Clone)]
pub struct RegionShape {
    pub name: String,
    pub polygons: Vec<Polygon>,
    pub bounds: Bounds,
}

impl RegionShape {
    pub fn new(name: impl Into<String>, polygons: Vec<Polygon>) -> Self {
        let mut bounds = Bounds::EMPTY;
        for ring in polygons.iter().flatten() {
            for &p in ring {
                bounds.include(p);
            }
        }
        Self {
            name: name.into(),
            polygons,
            bounds,
        }
    }

    /// Even-odd containment over every ring of every part.
    pub fn contains(&self, p: [f64; 2]) -> bool {
        if !self.bounds.contains(p) {
            return false;
        }
        let mut inside = false;
        for ring in self.polygons.iter().flatten() {
            if ring_crosses(ring, p) {
                inside = !inside;
            }
        }
        inside
    }
}

/// Whether a ray from `p` toward +x crosses `ring` an odd number of times.
fn ring_crosses(ring: &[[f64; 2]], p: [f64; 2]) -> bool {
    let mut inside = false;
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let [xi, yi] = ring[i];
        let [xj, yj] = ring[j];
        if (yi > p[1]) != (yj > p[1]) {
            let x_cross = xj + (p[1] - yj) * (xi - xj) / (yi - yj);
            if p[0] < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// All base-map regions.
#[derive(Resource, Debug, Clone, Default)]
pub struct RegionGeometry {
    pub shapes: Vec<RegionShape>,
    pub bounds: Option<Bounds>,
}

impl RegionGeometry {
    pub fn from_shapes(shapes: Vec<RegionShape>) -> Self {
        let mut bounds = Bounds::EMPTY;
        for shape in &shapes {
            bounds.merge(&shape.bounds);
        }
        Self {
            shapes,
            bounds: (!bounds.is_empty()).then_some(bounds),
        }
    }

    /// Parse a FeatureCollection whose features carry a `name` property.
    ///
    /// Features without a name or with non-areal geometry are skipped.
    pub fn from_geojson_str(text: &str) -> Result<Self, DataError> {
        let geojson: GeoJson = text
            .parse()
            .map_err(|e: geojson::Error| DataError::Geometry(e.to_string()))?;
        let GeoJson::FeatureCollection(collection) = geojson else {
            return Err(DataError::Geometry(
                "expected a FeatureCollection".to_string(),
            ));
        };

        let mut shapes = Vec::with_capacity(collection.features.len());
        for (idx, feature) in collection.features.iter().enumerate() {
            let Some(name) = feature.property("name").and_then(|v| v.as_str()) else {
                warn!("Skipping feature {idx}: no 'name' property");
                continue;
            };
            let polygons = match feature.geometry.as_ref().map(|g| &g.value) {
                Some(Value::Polygon(rings)) => vec![project_rings(rings)],
                Some(Value::MultiPolygon(parts)) => parts.iter().map(|p| project_rings(p)).collect(),
                _ => {
                    warn!("Skipping feature '{name}': not a Polygon or MultiPolygon");
                    continue;
                }
            };
            shapes.push(RegionShape::new(name, polygons));
        }

        if shapes.is_empty() {
            return Err(DataError::Geometry(
                "no named polygon features found".to_string(),
            ));
        }
        Ok(Self::from_shapes(shapes))
    }

    pub fn load(path: &Path) -> Result<Self, DataError> {
        let text = std::fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
        Self::from_geojson_str(&text)
    }

    /// Region under a projected point.
    pub fn region_at(&self, world: [f64; 2]) -> Option<&RegionShape> {
        self.shapes.iter().find(|s| s.contains(world))
    }

    pub fn region_at_lonlat(&self, lon: f64, lat: f64) -> Option<&RegionShape> {
        self.region_at(project(lon, lat))
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

fn project_rings(rings: &[Vec<Vec<f64>>]) -> Polygon {
    rings
        .iter()
        .map(|ring| {
            ring.iter()
                .filter(|pos| pos.len() >= 2)
                .map(|pos| project(pos[0], pos[1]))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A square "state" with a square hole and a two-part neighbour.
    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"name": "Brandenburg", "id": 12},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [
                        [[12.0, 52.0], [14.0, 52.0], [14.0, 53.0], [12.0, 53.0], [12.0, 52.0]],
                        [[12.8, 52.3], [13.6, 52.3], [13.6, 52.7], [12.8, 52.7], [12.8, 52.3]]
                    ]
                }
            },
            {
                "type": "Feature",
                "properties": {"name": "Berlin"},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[12.9, 52.4], [13.5, 52.4], [13.5, 52.6], [12.9, 52.6], [12.9, 52.4]]],
                        [[[20.0, 40.0], [21.0, 40.0], [21.0, 41.0], [20.0, 40.0]]]
                    ]
                }
            },
            {
                "type": "Feature",
                "properties": {},
                "geometry": {"type": "Point", "coordinates": [10.0, 50.0]}
            }
        ]
    }"#;

    #[test]
    fn parses_polygons_and_multipolygons() {
        let geometry = RegionGeometry::from_geojson_str(SAMPLE).unwrap();
        assert_eq!(geometry.shapes.len(), 2);
        assert_eq!(geometry.shapes[0].name, "Brandenburg");
        assert_eq!(geometry.shapes[0].polygons[0].len(), 2);
        assert_eq!(geometry.shapes[1].polygons.len(), 2);
        assert!(geometry.bounds.is_some());
    }

    #[test]
    fn hole_belongs_to_the_inner_region() {
        let geometry = RegionGeometry::from_geojson_str(SAMPLE).unwrap();
        let outer = geometry.region_at_lonlat(12.3, 52.1).map(|s| s.name.as_str());
        assert_eq!(outer, Some("Brandenburg"));
        let inner = geometry.region_at_lonlat(13.2, 52.5).map(|s| s.name.as_str());
        assert_eq!(inner, Some("Berlin"));
        assert!(geometry.region_at_lonlat(5.0, 45.0).is_none());
    }

    #[test]
    fn rejects_non_collections_and_empty_results() {
        let point = r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#;
        assert!(matches!(
            RegionGeometry::from_geojson_str(point),
            Err(DataError::Geometry(_))
        ));
        let empty = r#"{"type": "FeatureCollection", "features": []}"#;
        assert!(RegionGeometry::from_geojson_str(empty).is_err());
        assert!(RegionGeometry::from_geojson_str("not json").is_err());
    }

    #[test]
    fn bounds_contain_all_points() {
        let geometry = RegionGeometry::from_geojson_str(SAMPLE).unwrap();
        let bounds = geometry.bounds.unwrap();
        for shape in &geometry.shapes {
            for ring in shape.polygons.iter().flatten() {
                for &p in ring {
                    assert!(bounds.contains(p));
                }
            }
        }
    }
}
