use crate::Coord;

impl From<geo_types::Coord<f64>> for Coord {
    fn from(value: geo_types::Coord<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Coord> for geo_types::Coord<f64> {
    fn from(value: Coord) -> Self {
        geo_types::coord! { x: value.x, y: value.y }
    }
}

impl From<geo_types::Point<f64>> for Coord {
    fn from(value: geo_types::Point<f64>) -> Self {
        value.0.into()
    }
}

impl From<Coord> for geo_types::Point<f64> {
    fn from(value: Coord) -> Self {
        geo_types::Point(value.into())
    }
}
