use serde::{Deserialize, Serialize};

use crate::geometry::Geom;

/// Heterogeneous set of geometries.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GeometryCollection(Vec<Geom>);

impl GeometryCollection {
    /// Members of the collection.
    pub fn members(&self) -> &[Geom] {
        &self.0
    }

    /// Number of members in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the collection has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the inner vector of members.
    pub fn into_inner(self) -> Vec<Geom> {
        self.0
    }
}

impl From<Vec<Geom>> for GeometryCollection {
    fn from(value: Vec<Geom>) -> Self {
        Self(value)
    }
}

impl FromIterator<Geom> for GeometryCollection {
    fn from_iter<T: IntoIterator<Item = Geom>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
