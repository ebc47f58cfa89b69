use serde::{Deserialize, Serialize};

use crate::Coord;

/// A set of points.
///
/// Order of the points carries no meaning, but is kept by every transformation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiPoint(Vec<Coord>);

impl MultiPoint {
    /// Points of the set.
    pub fn points(&self) -> &[Coord] {
        &self.0
    }

    /// Number of points in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set has no points.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Coord>> for MultiPoint {
    fn from(value: Vec<Coord>) -> Self {
        Self(value)
    }
}

impl FromIterator<Coord> for MultiPoint {
    fn from_iter<T: IntoIterator<Item = Coord>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
