use crate::impls::{
    GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon,
};
use crate::{Coord, Geom};

/// Number of coordinates contained in a geometry.
///
/// The count is compositional: count of a container is the sum of counts of its members. Degenerate coordinates are
/// counted as any other.
pub trait PointCount {
    /// Returns total number of coordinates in the geometry.
    fn point_count(&self) -> usize;
}

impl PointCount for Coord {
    fn point_count(&self) -> usize {
        1
    }
}

impl PointCount for MultiPoint {
    fn point_count(&self) -> usize {
        self.len()
    }
}

impl PointCount for LineString {
    fn point_count(&self) -> usize {
        self.len()
    }
}

impl PointCount for MultiLineString {
    fn point_count(&self) -> usize {
        self.lines().iter().map(PointCount::point_count).sum()
    }
}

impl PointCount for Polygon {
    fn point_count(&self) -> usize {
        self.rings().iter().map(PointCount::point_count).sum()
    }
}

impl PointCount for MultiPolygon {
    fn point_count(&self) -> usize {
        self.parts().iter().map(PointCount::point_count).sum()
    }
}

impl PointCount for GeometryCollection {
    fn point_count(&self) -> usize {
        self.members().iter().map(PointCount::point_count).sum()
    }
}

impl PointCount for Geom {
    fn point_count(&self) -> usize {
        match self {
            Geom::Point(v) => v.point_count(),
            Geom::MultiPoint(v) => v.point_count(),
            Geom::LineString(v) => v.point_count(),
            Geom::MultiLineString(v) => v.point_count(),
            Geom::Polygon(v) => v.point_count(),
            Geom::MultiPolygon(v) => v.point_count(),
            Geom::GeometryCollection(v) => v.point_count(),
        }
    }
}
