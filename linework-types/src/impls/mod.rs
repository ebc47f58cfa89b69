//! Concrete geometry types of the model.

mod collection;
mod line_string;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod polygon;

pub use collection::GeometryCollection;
pub use line_string::LineString;
pub use multi_line_string::MultiLineString;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use polygon::Polygon;
