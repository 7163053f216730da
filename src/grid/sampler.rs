use crate::domain::{BoundaryPolygon, Point3};
use crate::error::{GridError, Result};
use crate::geometry::{Extent, Linspace};
use std::iter::FusedIterator;

/// Evenly spaced `nx * ny` lattice over a boundary's bounding box.
///
/// Points are computed on demand, so a grid can be iterated any number of
/// times without ever being materialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingGrid {
    extent: Extent,
    xs: Linspace,
    ys: Linspace,
    z: f64,
    len: usize,
}

/// Build the sampling grid for a boundary
///
/// # Algorithm
/// 1. Component-wise min/max over every boundary point
/// 2. Constant elevation at the vertical midpoint of the extent
/// 3. `nx` values over `[min_x, max_x]` and `ny` over `[min_y, max_y]`, both ends included
/// 4. Cross product, x outer and y inner
///
/// # Errors
/// * `EmptyInput` - the boundary has no points
/// * `Argument` - `nx` or `ny` is zero, or `nx * ny` overflows `usize`
pub fn sample_grid(boundary: &BoundaryPolygon, nx: usize, ny: usize) -> Result<SamplingGrid> {
    if nx == 0 {
        return Err(GridError::argument("Nx", "must be at least 1"));
    }
    if ny == 0 {
        return Err(GridError::argument("Ny", "must be at least 1"));
    }

    let len = nx.checked_mul(ny).ok_or_else(|| {
        GridError::argument("grid shape", format!("{nx}x{ny} points do not fit in memory"))
    })?;

    let extent = Extent::from_points(boundary.points()).ok_or(GridError::EmptyInput)?;

    Ok(SamplingGrid {
        extent,
        xs: Linspace::new(extent.min_x, extent.max_x, nx),
        ys: Linspace::new(extent.min_y, extent.max_y, ny),
        z: extent.mid_z(),
        len,
    })
}

impl SamplingGrid {
    /// Total number of points, `nx * ny`
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(nx, ny)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.xs.len(), self.ys.len())
    }

    /// Elevation shared by every point
    pub fn elevation(&self) -> f64 {
        self.z
    }

    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    pub fn x_values(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.xs.iter()
    }

    pub fn y_values(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.ys.iter()
    }

    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            next: 0,
            end: self.len(),
        }
    }

    fn point_at(&self, index: usize) -> Option<Point3> {
        let ny = self.ys.len();
        let x = self.xs.get(index / ny)?;
        let y = self.ys.get(index % ny)?;
        Some(Point3::new(x, y, self.z))
    }
}

impl<'a> IntoIterator for &'a SamplingGrid {
    type Item = Point3;
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a grid's points, x-major then y-minor
#[derive(Debug, Clone)]
pub struct GridIter<'a> {
    grid: &'a SamplingGrid,
    next: usize,
    end: usize,
}

impl Iterator for GridIter<'_> {
    type Item = Point3;

    fn next(&mut self) -> Option<Point3> {
        if self.next >= self.end {
            return None;
        }
        let point = self.grid.point_at(self.next);
        self.next += 1;
        point
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Point3> {
        self.next = self.next.saturating_add(n).min(self.end);
        self.next()
    }
}

impl DoubleEndedIterator for GridIter<'_> {
    fn next_back(&mut self) -> Option<Point3> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        self.grid.point_at(self.end)
    }
}

impl ExactSizeIterator for GridIter<'_> {}

impl FusedIterator for GridIter<'_> {}
