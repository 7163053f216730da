pub mod model;
pub mod parser;

pub use model::{Feature, FeatureCollection, Geometry, GeometryKind};
pub use parser::{load_boundary, parse_boundary};
