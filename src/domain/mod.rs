pub mod boundary;
pub mod point;

pub use boundary::BoundaryPolygon;
pub use point::Point3;
