use crate::domain::Point3;

/// Axis-aligned 3D bounding box of a point set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl Extent {
    /// Create an extent from a set of points, `None` if there are none
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;

        let mut extent = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
            min_z: first.z,
            max_z: first.z,
        };
        extent.expand(points);

        Some(extent)
    }

    /// Expand the extent to include more points
    pub fn expand<'a, I>(&mut self, points: I)
    where
        I: IntoIterator<Item = &'a Point3>,
    {
        for p in points {
            self.min_x = self.min_x.min(p.x);
            self.max_x = self.max_x.max(p.x);
            self.min_y = self.min_y.min(p.y);
            self.max_y = self.max_y.max(p.y);
            self.min_z = self.min_z.min(p.z);
            self.max_z = self.max_z.max(p.z);
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Vertical midpoint, the elevation every grid point is placed at
    pub fn mid_z(&self) -> f64 {
        self.min_z + (self.max_z - self.min_z) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_from_points() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1000.0, 2000.0, 30.0),
            Point3::new(500.0, -1000.0, 10.0),
        ];
        let extent = Extent::from_points(&points).unwrap();

        assert_eq!(extent.min_x, 0.0);
        assert_eq!(extent.max_x, 1000.0);
        assert_eq!(extent.min_y, -1000.0);
        assert_eq!(extent.max_y, 2000.0);
        assert_eq!(extent.width(), 1000.0);
        assert_eq!(extent.height(), 3000.0);
        assert_eq!(extent.mid_z(), 15.0);
    }

    #[test]
    fn test_extent_empty() {
        let points: Vec<Point3> = Vec::new();
        assert!(Extent::from_points(&points).is_none());
    }

    #[test]
    fn test_mid_z_negative_elevations() {
        let points = vec![Point3::new(0.0, 0.0, -4.0), Point3::new(0.0, 0.0, 2.0)];
        let extent = Extent::from_points(&points).unwrap();
        assert_eq!(extent.mid_z(), -1.0);
    }
}
