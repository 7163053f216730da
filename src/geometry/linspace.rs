/// `count` evenly spaced values over `[start, stop]`, both ends included.
///
/// A single value yields `start`. The last value is pinned to `stop` so it
/// never drifts from the endpoint through accumulated rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linspace {
    start: f64,
    stop: f64,
    count: usize,
}

impl Linspace {
    pub fn new(start: f64, stop: f64, count: usize) -> Self {
        Self { start, stop, count }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Value at `index`, `None` past the end
    pub fn get(&self, index: usize) -> Option<f64> {
        if index >= self.count {
            return None;
        }
        if self.count == 1 {
            return Some(self.start);
        }
        if index == self.count - 1 {
            return Some(self.stop);
        }

        let step = (self.stop - self.start) / (self.count - 1) as f64;
        Some(self.start + index as f64 * step)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.count).map(move |i| self.value_at(i))
    }

    fn value_at(&self, index: usize) -> f64 {
        self.get(index).unwrap_or(self.stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let values: Vec<f64> = Linspace::new(0.0, 10.0, 5).iter().collect();
        assert_eq!(values, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    }

    #[test]
    fn test_linspace_single_value() {
        let space = Linspace::new(3.0, 9.0, 1);
        assert_eq!(space.iter().collect::<Vec<_>>(), vec![3.0]);
    }

    #[test]
    fn test_linspace_last_value_is_exact() {
        let space = Linspace::new(0.1, 0.7, 7);
        assert_eq!(space.get(6), Some(0.7));
        assert_eq!(space.get(7), None);
    }

    #[test]
    fn test_linspace_degenerate_range() {
        let values: Vec<f64> = Linspace::new(4.0, 4.0, 3).iter().collect();
        assert_eq!(values, vec![4.0, 4.0, 4.0]);
    }
}
