use serde::{Deserialize, Serialize};

use crate::impls::polygon::Polygon;

/// A set of polygons.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiPolygon(Vec<Polygon>);

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(parts: Vec<Polygon>) -> Self {
        Self(parts)
    }
}

impl MultiPolygon {
    /// Returns reference to the inner polygons.
    pub fn parts(&self) -> &[Polygon] {
        &self.0
    }

    /// Number of polygons.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no polygons.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the inner vector of polygons.
    pub fn into_inner(self) -> Vec<Polygon> {
        self.0
    }
}
