//! Linework turns line geometries into compact vertex arrays that can be pasted into shader source code.
//!
//! The input is a WKT `GEOMETRYCOLLECTION` of `MULTILINESTRING`s with coordinates in degrees, e.g. coastlines or
//! country borders. The [`Pipeline`] reduces it to a set of simplified line strings:
//!
//! 1. the collection is flattened into one multi line string;
//! 2. lines are simplified with a [`Simplifier`] (Douglas-Peucker by default);
//! 3. degenerate (NaN) vertices and lines that became empty are removed;
//! 4. lines with too few vertices to be visible are dropped.
//!
//! The surviving vertices are written in radians by the [`emit`] module as `vec2(x, y),` records, each line followed
//! by a `vec2(0., 0.),` terminator.
//!
//! ```
//! use linework::{GeometryParser, Pipeline, PipelineOptions, WktParser};
//!
//! let geom = WktParser
//!     .parse("GEOMETRYCOLLECTION(MULTILINESTRING((0 0, 10 40, 20 0, 30 40)))")
//!     .unwrap();
//! let output = Pipeline::new(PipelineOptions::default()).run(&geom).unwrap();
//!
//! assert_eq!(output.points_before, 4);
//! assert_eq!(output.lines.len(), 1);
//! ```

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod emit;
pub mod error;
mod parser;
mod pipeline;
pub mod settings;
mod simplify;

pub use error::LineworkError;
pub use parser::{GeometryParser, WktParser};
pub use pipeline::{Pipeline, PipelineOptions, PipelineOutput};
pub use simplify::{DouglasPeucker, Simplifier};

// Reexport linework_types
pub use linework_types;
