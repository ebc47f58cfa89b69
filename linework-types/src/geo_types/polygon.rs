use crate::impls::{LineString, MultiPolygon, Polygon};

impl From<geo_types::Polygon<f64>> for Polygon {
    fn from(value: geo_types::Polygon<f64>) -> Self {
        let (exterior, interiors) = value.into_inner();
        Polygon::new(
            exterior.into(),
            interiors.into_iter().map(LineString::from).collect(),
        )
    }
}

/// Rings are closed by `geo_types` if their first and last vertices differ. A polygon without rings gets an empty
/// exterior ring.
impl From<Polygon> for geo_types::Polygon<f64> {
    fn from(value: Polygon) -> Self {
        let mut rings = value.into_rings().into_iter().map(geo_types::LineString::from);
        let exterior = rings.next().unwrap_or_else(|| geo_types::LineString(vec![]));
        geo_types::Polygon::new(exterior, rings.collect())
    }
}

impl From<geo_types::MultiPolygon<f64>> for MultiPolygon {
    fn from(value: geo_types::MultiPolygon<f64>) -> Self {
        MultiPolygon::from(value.0.into_iter().map(Polygon::from).collect::<Vec<_>>())
    }
}

impl From<MultiPolygon> for geo_types::MultiPolygon<f64> {
    fn from(value: MultiPolygon) -> Self {
        geo_types::MultiPolygon(
            value
                .into_inner()
                .into_iter()
                .map(geo_types::Polygon::from)
                .collect(),
        )
    }
}
