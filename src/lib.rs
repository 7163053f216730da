//! isogrid - Sampling grids over GeoJSON footprints for isovist analysis

pub mod config;
pub mod domain;
pub mod error;
pub mod geojson;
pub mod geometry;
pub mod grid;
pub mod progress;
pub mod results;

pub use domain::{BoundaryPolygon, Point3};
pub use error::{GridError, Result};
pub use grid::{SamplingGrid, sample_grid};
