use serde::{Deserialize, Serialize};

use crate::geometry_type::GeometryKind;
use crate::impls::{
    GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon,
};
use crate::Coord;

/// Geometry of any of the supported types.
///
/// The set of variants is closed: every operation over a geometry matches on all of them, so there is no way for an
/// unknown variant to reach a traversal.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Geom {
    /// Single coordinate.
    Point(Coord),
    /// Set of coordinates.
    MultiPoint(MultiPoint),
    /// Path.
    LineString(LineString),
    /// Set of paths.
    MultiLineString(MultiLineString),
    /// Polygon with holes.
    Polygon(Polygon),
    /// Set of polygons.
    MultiPolygon(MultiPolygon),
    /// Set of geometries of any type.
    GeometryCollection(GeometryCollection),
}

impl Geom {
    /// Type of the geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geom::Point(_) => GeometryKind::Point,
            Geom::MultiPoint(_) => GeometryKind::MultiPoint,
            Geom::LineString(_) => GeometryKind::LineString,
            Geom::MultiLineString(_) => GeometryKind::MultiLineString,
            Geom::Polygon(_) => GeometryKind::Polygon,
            Geom::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geom::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }
}

impl From<Coord> for Geom {
    fn from(value: Coord) -> Self {
        Self::Point(value)
    }
}

impl From<MultiPoint> for Geom {
    fn from(value: MultiPoint) -> Self {
        Self::MultiPoint(value)
    }
}

impl From<LineString> for Geom {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<MultiLineString> for Geom {
    fn from(value: MultiLineString) -> Self {
        Self::MultiLineString(value)
    }
}

impl From<Polygon> for Geom {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<MultiPolygon> for Geom {
    fn from(value: MultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}

impl From<GeometryCollection> for Geom {
    fn from(value: GeometryCollection) -> Self {
        Self::GeometryCollection(value)
    }
}
