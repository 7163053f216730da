use crate::error::{GridError, Result};

/// Per-sample values laid out on the sampling lattice.
///
/// Row `i` holds the `ny` values of the i-th x coordinate, which is the
/// order the sampler emits points in.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueGrid {
    nx: usize,
    ny: usize,
    values: Vec<f64>,
}

impl ValueGrid {
    pub fn from_values(values: Vec<f64>, nx: usize, ny: usize) -> Result<Self> {
        if nx == 0 || ny == 0 {
            return Err(GridError::argument(
                "grid shape",
                format!("{nx}x{ny} has no cells"),
            ));
        }
        let expected = nx.checked_mul(ny).ok_or_else(|| {
            GridError::argument("grid shape", format!("{nx}x{ny} cells do not fit in memory"))
        })?;
        if values.len() != expected {
            return Err(GridError::argument(
                "grid shape",
                format!(
                    "{} values cannot be reshaped into {nx}x{ny} ({expected} expected)",
                    values.len()
                ),
            ));
        }
        Ok(Self { nx, ny, values })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, ix: usize, iy: usize) -> Option<f64> {
        if ix >= self.nx || iy >= self.ny {
            return None;
        }
        self.values.get(ix * self.ny + iy).copied()
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.values.chunks(self.ny)
    }

    /// q-th percentile with linear interpolation between closest ranks.
    ///
    /// NaN values are ignored; a grid of only NaN yields NaN.
    pub fn percentile(&self, q: f64) -> Result<f64> {
        if !(0.0..=100.0).contains(&q) {
            return Err(GridError::argument(
                "percentile",
                format!("{q} is outside [0, 100]"),
            ));
        }

        let mut sorted: Vec<f64> = self.values.iter().copied().filter(|v| !v.is_nan()).collect();
        if sorted.is_empty() {
            return Ok(f64::NAN);
        }
        sorted.sort_by(f64::total_cmp);

        let rank = q / 100.0 * (sorted.len() - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = rank.ceil() as usize;
        let fraction = rank - lower as f64;

        Ok(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
    }

    /// Clamp every value into `[low, high]`
    pub fn clip(&mut self, low: f64, high: f64) {
        for v in &mut self.values {
            if *v < low {
                *v = low;
            } else if *v > high {
                *v = high;
            }
        }
    }

    /// Clamp to the values at two percentiles, returning the bounds used
    pub fn clip_percentiles(&mut self, low_q: f64, high_q: f64) -> Result<(f64, f64)> {
        if low_q > high_q {
            return Err(GridError::argument(
                "percentile",
                format!("low {low_q} is above high {high_q}"),
            ));
        }
        let low = self.percentile(low_q)?;
        let high = self.percentile(high_q)?;
        self.clip(low, high);
        Ok((low, high))
    }

    /// Rescale to `[0, 1]`; a constant grid becomes all zeros
    pub fn normalize(&mut self) {
        let (min, max) = self
            .values
            .iter()
            .filter(|v| !v.is_nan())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        let range = max - min;
        for v in &mut self.values {
            if v.is_nan() {
                continue;
            }
            *v = if range > 0.0 { (*v - min) / range } else { 0.0 };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(values: &[f64], nx: usize, ny: usize) -> ValueGrid {
        ValueGrid::from_values(values.to_vec(), nx, ny).unwrap()
    }

    #[test]
    fn test_reshape_is_x_major() {
        let g = grid(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);

        let rows: Vec<&[f64]> = g.rows().collect();
        assert_eq!(rows, vec![&[1.0, 2.0, 3.0][..], &[4.0, 5.0, 6.0][..]]);
        assert_eq!(g.get(1, 0), Some(4.0));
        assert_eq!(g.get(2, 0), None);
    }

    #[test]
    fn test_reshape_count_mismatch() {
        let err = ValueGrid::from_values(vec![1.0, 2.0, 3.0], 2, 2).unwrap_err();
        assert!(matches!(err, GridError::Argument { .. }));
        assert!(ValueGrid::from_values(Vec::new(), 0, 5).is_err());
    }

    #[test]
    fn test_reshape_oversized_shape() {
        // 2^32 * 2^32 wraps to 0 in usize and must not accept an empty file
        let err = ValueGrid::from_values(Vec::new(), 1 << 32, 1 << 32).unwrap_err();
        assert!(matches!(err, GridError::Argument { name: "grid shape", .. }));
    }

    #[test]
    fn test_percentile_interpolates() {
        let g = grid(&[4.0, 1.0, 3.0, 2.0], 2, 2);

        assert_eq!(g.percentile(0.0).unwrap(), 1.0);
        assert_eq!(g.percentile(100.0).unwrap(), 4.0);
        assert_eq!(g.percentile(50.0).unwrap(), 2.5);
        // rank = 0.25 * 3 = 0.75
        assert!((g.percentile(25.0).unwrap() - 1.75).abs() < 1e-12);
        assert!(g.percentile(101.0).is_err());
        assert!(g.percentile(-1.0).is_err());
    }

    #[test]
    fn test_percentile_ignores_nan() {
        let g = grid(&[f64::NAN, 1.0, 3.0, f64::NAN], 2, 2);
        assert_eq!(g.percentile(50.0).unwrap(), 2.0);

        let all_nan = grid(&[f64::NAN], 1, 1);
        assert!(all_nan.percentile(50.0).unwrap().is_nan());
    }

    #[test]
    fn test_clip_percentiles() {
        let mut g = grid(&[0.0, 1.0, 2.0, 3.0, 4.0, 100.0], 3, 2);
        let (low, high) = g.clip_percentiles(0.0, 80.0).unwrap();

        assert_eq!(low, 0.0);
        assert_eq!(high, 4.0);
        assert_eq!(g.values(), &[0.0, 1.0, 2.0, 3.0, 4.0, 4.0]);
        assert!(g.clip_percentiles(90.0, 10.0).is_err());
    }

    #[test]
    fn test_normalize() {
        let mut g = grid(&[2.0, 4.0, 6.0, 10.0], 2, 2);
        g.normalize();
        assert_eq!(g.values(), &[0.0, 0.25, 0.5, 1.0]);
    }

    #[test]
    fn test_normalize_constant_grid() {
        let mut g = grid(&[7.0, 7.0, 7.0], 3, 1);
        g.normalize();
        assert_eq!(g.values(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_normalize_keeps_nan() {
        let mut g = grid(&[1.0, f64::NAN, 3.0, 2.0], 2, 2);
        g.normalize();

        assert_eq!(g.get(0, 0), Some(0.0));
        assert!(g.get(0, 1).unwrap().is_nan());
        assert_eq!(g.get(1, 0), Some(1.0));
        assert_eq!(g.get(1, 1), Some(0.5));
    }
}
