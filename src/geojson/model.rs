use serde::Deserialize;
use serde_json::Value;

/// Top-level GeoJSON document; only feature collections carry boundaries
#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// Geometry object with its coordinates left untyped until the type is known
#[derive(Debug, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub coordinates: Value,
}

/// Geometry types the boundary loader distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Polygon,
    MultiPolygon,
    /// Anything without an areal outer ring
    Other,
}

impl GeometryKind {
    pub fn from_type_name(name: &str) -> GeometryKind {
        match name {
            "Polygon" => GeometryKind::Polygon,
            "MultiPolygon" => GeometryKind::MultiPolygon,
            _ => GeometryKind::Other,
        }
    }
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        GeometryKind::from_type_name(&self.type_)
    }
}

/// A GeoJSON position, `[x, y, z, ...]`
pub type Position = Vec<f64>;
/// Polygon coordinates: exterior ring first, then holes
pub type PolygonCoordinates = Vec<Vec<Position>>;
pub type MultiPolygonCoordinates = Vec<PolygonCoordinates>;
