use serde::{Deserialize, Serialize};

use crate::impls::line_string::LineString;

/// Polygon given as a sequence of rings.
///
/// The first ring is the exterior boundary, the rest are holes. This structure is not enforced: after pruning, a hole
/// can become the first ring if the exterior one was removed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Polygon {
    rings: Vec<LineString>,
}

impl Polygon {
    /// Creates a new polygon from the exterior ring and a list of holes.
    pub fn new(exterior: LineString, interiors: Vec<LineString>) -> Self {
        let mut rings = Vec::with_capacity(interiors.len() + 1);
        rings.push(exterior);
        rings.extend(interiors);
        Self { rings }
    }

    /// All rings of the polygon, exterior first.
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    /// Number of rings.
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    /// Returns true if the polygon has no rings.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Returns the inner vector of rings.
    pub fn into_rings(self) -> Vec<LineString> {
        self.rings
    }
}

impl From<Vec<LineString>> for Polygon {
    fn from(rings: Vec<LineString>) -> Self {
        Self { rings }
    }
}

impl From<LineString> for Polygon {
    fn from(value: LineString) -> Self {
        Self { rings: vec![value] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;

    #[test]
    fn exterior_goes_first() {
        let exterior = LineString::from(vec![coord!(0.0, 0.0), coord!(10.0, 0.0), coord!(0.0, 10.0)]);
        let hole = LineString::from(vec![coord!(1.0, 1.0), coord!(2.0, 1.0), coord!(1.0, 2.0)]);
        let polygon = Polygon::new(exterior.clone(), vec![hole.clone()]);

        assert_eq!(polygon.len(), 2);
        assert_eq!(polygon.rings(), &[exterior, hole]);
        assert!(Polygon::default().is_empty());
    }
}
