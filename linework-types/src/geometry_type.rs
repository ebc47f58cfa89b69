//! See documentation for [`GeometryKind`].
use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag naming a geometry variant without its content.
///
/// Used to report which variant broke an input contract, e.g. a polygon given where a collection of
/// multi line strings was expected. Variants that are not part of the [`Geom`](crate::Geom) model but can be met at
/// conversion boundaries (`Line`, `Rect`, `Triangle`) are represented too, so that such inputs can be named in the
/// error message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GeometryKind {
    /// Single coordinate.
    Point,
    /// Set of coordinates.
    MultiPoint,
    /// Sequence of coordinates forming a path.
    LineString,
    /// Set of line strings.
    MultiLineString,
    /// Exterior ring with optional holes.
    Polygon,
    /// Set of polygons.
    MultiPolygon,
    /// Heterogeneous set of geometries.
    GeometryCollection,
    /// Straight line segment. Not part of the model.
    Line,
    /// Axis-aligned rectangle. Not part of the model.
    Rect,
    /// Triangle. Not part of the model.
    Triangle,
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeometryKind::Point => "Point",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::LineString => "LineString",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::GeometryCollection => "GeometryCollection",
            GeometryKind::Line => "Line",
            GeometryKind::Rect => "Rect",
            GeometryKind::Triangle => "Triangle",
        };

        f.write_str(name)
    }
}
