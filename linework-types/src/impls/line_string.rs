use serde::{Deserialize, Serialize};

use crate::Coord;

/// Ordered sequence of coordinates defining a path.
///
/// Unlike the multi point, order of the coordinates is significant here. Closed line strings repeat the first
/// coordinate at the end, exactly as they are given by the input.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct LineString(Vec<Coord>);

impl std::ops::Deref for LineString {
    type Target = [Coord];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl LineString {
    /// Vertices of the line string.
    pub fn points(&self) -> &[Coord] {
        &self.0
    }

    /// Iterate over the vertices of the line string.
    pub fn iter_points(&self) -> impl Iterator<Item = &'_ Coord> {
        self.0.iter()
    }

    /// Returns the inner vector of vertices.
    pub fn into_inner(self) -> Vec<Coord> {
        self.0
    }
}

impl From<Vec<Coord>> for LineString {
    fn from(value: Vec<Coord>) -> Self {
        Self(value)
    }
}

impl FromIterator<Coord> for LineString {
    fn from_iter<T: IntoIterator<Item = Coord>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
