use super::model::{
    FeatureCollection, Geometry, GeometryKind, MultiPolygonCoordinates, PolygonCoordinates,
    Position,
};
use crate::domain::{BoundaryPolygon, Point3};
use crate::error::{GridError, Result};
use std::path::Path;

/// Read a GeoJSON file and collect the outer rings of its areal features.
///
/// The file is read completely and closed before any parsing happens.
pub fn load_boundary(path: &Path) -> Result<BoundaryPolygon> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| GridError::file_access(path, e))?;
    parse_boundary(&contents).map_err(|e| e.in_file(path))
}

/// Parse GeoJSON text into a boundary.
///
/// # Algorithm
/// For every feature, dispatch on the geometry type:
/// - `Polygon`: take its exterior ring
/// - `MultiPolygon`: take the exterior ring of every member polygon
/// - anything else, or a null geometry: skip
///
/// Holes never contribute to the boundary. An empty result is not an error
/// here; the sampler decides what to do with an empty boundary.
///
/// # Errors
/// * `Malformed` - invalid JSON, or coordinates that do not match their geometry type
pub fn parse_boundary(json: &str) -> Result<BoundaryPolygon> {
    let collection: FeatureCollection = serde_json::from_str(json)
        .map_err(|e| GridError::malformed(format!("invalid GeoJSON: {e}")))?;

    let mut boundary = BoundaryPolygon::default();

    for (index, feature) in collection.features.iter().enumerate() {
        let geometry = match &feature.geometry {
            Some(g) => g,
            None => continue,
        };

        let rings = exterior_rings(geometry)
            .map_err(|e| GridError::malformed(format!("feature {index}: {e}")))?;
        for ring in rings {
            boundary.push_ring(ring);
        }
    }

    Ok(boundary)
}

fn exterior_rings(geometry: &Geometry) -> std::result::Result<Vec<Vec<Point3>>, String> {
    match geometry.kind() {
        GeometryKind::Polygon => {
            let polygon: PolygonCoordinates = decode(geometry)?;
            Ok(polygon
                .first()
                .map(|exterior| to_points(exterior))
                .transpose()?
                .into_iter()
                .collect())
        }
        GeometryKind::MultiPolygon => {
            let polygons: MultiPolygonCoordinates = decode(geometry)?;
            polygons
                .iter()
                .filter_map(|polygon| polygon.first())
                .map(|exterior| to_points(exterior))
                .collect()
        }
        GeometryKind::Other => Ok(Vec::new()),
    }
}

fn decode<T: serde::de::DeserializeOwned>(geometry: &Geometry) -> std::result::Result<T, String> {
    serde_json::from_value(geometry.coordinates.clone())
        .map_err(|e| format!("malformed {} coordinates: {e}", geometry.type_))
}

fn to_points(ring: &[Position]) -> std::result::Result<Vec<Point3>, String> {
    ring.iter()
        .map(|position| match position.as_slice() {
            [x, y, z, ..] => Ok(Point3::new(*x, *y, *z)),
            _ => Err(format!(
                "position {position:?} has {} components, expected x, y and z",
                position.len()
            )),
        })
        .collect()
}
