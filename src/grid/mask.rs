use crate::domain::{BoundaryPolygon, Point3};
use geo::{Intersects, MultiPolygon};

/// Keeps grid points that fall on the boundary's planar footprint
#[derive(Debug, Clone)]
pub struct FootprintMask {
    footprint: MultiPolygon<f64>,
}

impl FootprintMask {
    pub fn new(boundary: &BoundaryPolygon) -> Self {
        Self {
            footprint: boundary.footprint(),
        }
    }

    /// Inside or on an edge of any footprint polygon
    pub fn contains(&self, point: &Point3) -> bool {
        let coord = point.xy();
        self.footprint.iter().any(|polygon| polygon.intersects(&coord))
    }

    pub fn retain<'a, I>(&'a self, points: I) -> impl Iterator<Item = Point3> + 'a
    where
        I: IntoIterator<Item = Point3>,
        I::IntoIter: 'a,
    {
        points.into_iter().filter(move |p| self.contains(p))
    }
}
