use super::Point3;
use geo::{LineString, MultiPolygon, Polygon};

/// Outer rings of the features a sampling grid is built over.
///
/// Rings are kept separately so the planar footprint can be rebuilt, but
/// the sampler only ever sees the flattened point sequence.
#[derive(Debug, Clone, Default)]
pub struct BoundaryPolygon {
    rings: Vec<Vec<Point3>>,
}

impl BoundaryPolygon {
    /// A boundary made of a single ring
    pub fn new(points: Vec<Point3>) -> Self {
        Self {
            rings: vec![points],
        }
    }

    pub fn from_rings(rings: Vec<Vec<Point3>>) -> Self {
        Self { rings }
    }

    pub fn push_ring(&mut self, ring: Vec<Point3>) {
        self.rings.push(ring);
    }

    pub fn rings(&self) -> &[Vec<Point3>] {
        &self.rings
    }

    /// All points of all rings, in input order
    pub fn points(&self) -> impl Iterator<Item = &Point3> + '_ {
        self.rings.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.rings.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Planar footprint; rings with fewer than 3 points have no area and are skipped
    pub fn footprint(&self) -> MultiPolygon<f64> {
        self.rings
            .iter()
            .filter(|ring| ring.len() >= 3)
            .map(|ring| {
                let exterior: LineString<f64> = ring.iter().map(Point3::xy).collect();
                Polygon::new(exterior, Vec::new())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flattened_points_keep_ring_order() {
        let boundary = BoundaryPolygon::from_rings(vec![
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
            vec![Point3::new(5.0, 5.0, 1.0)],
        ]);

        let xs: Vec<f64> = boundary.points().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 5.0]);
        assert_eq!(boundary.len(), 3);
        assert!(!boundary.is_empty());
    }

    #[test]
    fn test_empty_rings_count_as_empty() {
        let boundary = BoundaryPolygon::from_rings(vec![Vec::new(), Vec::new()]);
        assert!(boundary.is_empty());
    }

    #[test]
    fn test_footprint_skips_degenerate_rings() {
        let boundary = BoundaryPolygon::from_rings(vec![
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)],
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(4.0, 0.0, 0.0),
                Point3::new(4.0, 4.0, 0.0),
                Point3::new(0.0, 4.0, 0.0),
            ],
        ]);

        assert_eq!(boundary.footprint().0.len(), 1);
    }
}
