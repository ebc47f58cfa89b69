use serde::{Deserialize, Serialize};

/// A pair of `x` and `y` coordinates.
///
/// Components may be NaN. Such a coordinate is called *degenerate* and is removed by
/// [`RemoveEmpty`](crate::RemoveEmpty).
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (longitude for geographic data).
    pub x: f64,
    /// Y coordinate (latitude for geographic data).
    pub y: f64,
}

impl Coord {
    /// Creates a new coordinate.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if either of the components is NaN.
    ///
    /// This is the only degeneracy criterion: infinite values, duplicate coordinates or zero-length
    /// segments are not considered degenerate.
    pub fn is_degenerate(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Returns true if both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Coord {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Creates a [`Coord`] from `x` and `y` values.
///
/// ```
/// use linework_types::coord;
///
/// let c = coord!(10.0, 20.0);
/// assert_eq!(c.x, 10.0);
/// ```
#[macro_export]
macro_rules! coord {
    ($x:expr, $y:expr) => {
        $crate::Coord::new($x, $y)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_coordinates() {
        assert!(!Coord::new(0.0, 0.0).is_degenerate());
        assert!(Coord::new(f64::NAN, 0.0).is_degenerate());
        assert!(Coord::new(0.0, f64::NAN).is_degenerate());
        assert!(Coord::new(f64::NAN, f64::NAN).is_degenerate());
    }

    #[test]
    fn infinite_coordinates_are_not_degenerate() {
        assert!(!Coord::new(f64::INFINITY, 0.0).is_degenerate());
        assert!(!Coord::new(0.0, f64::NEG_INFINITY).is_degenerate());
    }

    #[test]
    fn finite_coordinates() {
        assert!(Coord::new(1.0, -1.0).is_finite());
        assert!(!Coord::new(f64::INFINITY, 0.0).is_finite());
        assert!(!Coord::new(0.0, f64::NAN).is_finite());
        assert_eq!(Coord::from([1.0, 2.0]), Coord::from((1.0, 2.0)));
    }
}
