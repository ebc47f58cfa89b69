use crate::impls::{LineString, MultiLineString, MultiPoint};
use crate::Coord;

impl From<geo_types::LineString<f64>> for LineString {
    fn from(value: geo_types::LineString<f64>) -> Self {
        value.0.into_iter().map(Coord::from).collect()
    }
}

impl From<LineString> for geo_types::LineString<f64> {
    fn from(value: LineString) -> Self {
        geo_types::LineString(
            value
                .into_inner()
                .into_iter()
                .map(geo_types::Coord::from)
                .collect(),
        )
    }
}

impl From<geo_types::MultiLineString<f64>> for MultiLineString {
    fn from(value: geo_types::MultiLineString<f64>) -> Self {
        value.0.into_iter().map(LineString::from).collect()
    }
}

impl From<MultiLineString> for geo_types::MultiLineString<f64> {
    fn from(value: MultiLineString) -> Self {
        geo_types::MultiLineString(
            value
                .into_inner()
                .into_iter()
                .map(geo_types::LineString::from)
                .collect(),
        )
    }
}

impl From<geo_types::MultiPoint<f64>> for MultiPoint {
    fn from(value: geo_types::MultiPoint<f64>) -> Self {
        value.0.into_iter().map(Coord::from).collect()
    }
}

impl From<MultiPoint> for geo_types::MultiPoint<f64> {
    fn from(value: MultiPoint) -> Self {
        geo_types::MultiPoint(
            value
                .points()
                .iter()
                .map(|&c| geo_types::Point::from(c))
                .collect(),
        )
    }
}
