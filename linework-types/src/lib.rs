//! Geometry model used by `linework` together with the recursive transformations that turn an arbitrary
//! nested geometry into a flat set of render-ready line strings.
//!
//! The model is a closed sum type [`Geom`] over seven variants. Every transformation in this crate is a pure
//! function of its input and produces a new owned tree:
//!
//! * [`PointCount`] sums the number of coordinates in a geometry;
//! * [`RemoveEmpty`] removes degenerate coordinates and containers that become empty because of that;
//! * [`flatten`] and [`GeometryCollection::flatten_lines`] merge a collection of multi line strings into one;
//! * [`MultiLineString::filter_short`] drops line strings with too few vertices.
//!
//! ```
//! use linework_types::{coord, LineString, MultiLineString, PointCount, RemoveEmpty};
//!
//! let lines = MultiLineString::from(vec![
//!     LineString::from(vec![coord!(0.0, 0.0), coord!(1.0, 1.0), coord!(2.0, 0.0)]),
//!     LineString::from(vec![coord!(f64::NAN, 0.0)]),
//! ]);
//!
//! let pruned = lines.remove_empty().unwrap();
//! assert_eq!(pruned.point_count(), 3);
//! ```

mod coord;
pub use coord::Coord;

pub mod error;
pub use error::LineworkTypesError;

mod flatten;
pub use flatten::flatten;

mod geometry;
pub use geometry::Geom;

mod geometry_type;
pub use geometry_type::GeometryKind;

pub mod impls;
pub use impls::{GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon};

mod point_count;
pub use point_count::PointCount;

mod remove_empty;
pub use remove_empty::RemoveEmpty;

#[cfg(feature = "geo-types")]
mod geo_types;
