//! Conversions between the model and [`geo_types`] geometries.
//!
//! `geo_types` is the exchange format with parsers and geometry algorithms. Conversion into the model is fallible:
//! `Line`, `Rect` and `Triangle` variants have no counterpart in [`Geom`] and are rejected with
//! [`LineworkTypesError::UnsupportedGeometry`].
//!
//! Conversion back to `geo_types` keeps every vertex and the nesting of containers, except for polygons:
//! `geo_types` closes open rings and requires an exterior ring, so an open ring gains its first vertex at the end and a
//! polygon without rings gets an empty exterior.

mod coord;
mod linestring;
mod polygon;

use crate::error::LineworkTypesError;
use crate::impls::{
    GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon,
};
use crate::{Geom, GeometryKind};

impl TryFrom<geo_types::Geometry<f64>> for Geom {
    type Error = LineworkTypesError;

    fn try_from(value: geo_types::Geometry<f64>) -> Result<Self, Self::Error> {
        use geo_types::Geometry as G;

        Ok(match value {
            G::Point(v) => Geom::Point(v.into()),
            G::MultiPoint(v) => Geom::MultiPoint(MultiPoint::from(v)),
            G::LineString(v) => Geom::LineString(LineString::from(v)),
            G::MultiLineString(v) => Geom::MultiLineString(MultiLineString::from(v)),
            G::Polygon(v) => Geom::Polygon(Polygon::from(v)),
            G::MultiPolygon(v) => Geom::MultiPolygon(MultiPolygon::from(v)),
            G::GeometryCollection(v) => Geom::GeometryCollection(GeometryCollection::try_from(v)?),
            G::Line(_) => return Err(LineworkTypesError::UnsupportedGeometry(GeometryKind::Line)),
            G::Rect(_) => return Err(LineworkTypesError::UnsupportedGeometry(GeometryKind::Rect)),
            G::Triangle(_) => {
                return Err(LineworkTypesError::UnsupportedGeometry(
                    GeometryKind::Triangle,
                ))
            }
        })
    }
}

impl From<Geom> for geo_types::Geometry<f64> {
    fn from(value: Geom) -> Self {
        use geo_types::Geometry as G;

        match value {
            Geom::Point(v) => G::Point(v.into()),
            Geom::MultiPoint(v) => G::MultiPoint(v.into()),
            Geom::LineString(v) => G::LineString(v.into()),
            Geom::MultiLineString(v) => G::MultiLineString(v.into()),
            Geom::Polygon(v) => G::Polygon(v.into()),
            Geom::MultiPolygon(v) => G::MultiPolygon(v.into()),
            Geom::GeometryCollection(v) => G::GeometryCollection(v.into()),
        }
    }
}

impl TryFrom<geo_types::GeometryCollection<f64>> for GeometryCollection {
    type Error = LineworkTypesError;

    fn try_from(value: geo_types::GeometryCollection<f64>) -> Result<Self, Self::Error> {
        value.0.into_iter().map(Geom::try_from).collect()
    }
}

impl From<GeometryCollection> for geo_types::GeometryCollection<f64> {
    fn from(value: GeometryCollection) -> Self {
        geo_types::GeometryCollection(
            value
                .into_inner()
                .into_iter()
                .map(geo_types::Geometry::from)
                .collect(),
        )
    }
}
