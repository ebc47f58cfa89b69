//! Output of the processed lines as `vec2` records.
//!
//! Every vertex is converted from degrees to radians and written as `vec2(<x>, <y>),` with six fractional digits.
//! After the last vertex of every line string a `vec2(0., 0.),` terminator is written. The output can be pasted into
//! a GLSL/WGSL array literal.

use std::f64::consts::PI;
use std::fmt;
use std::io::Write;

use linework_types::{Coord, MultiLineString};

/// Converts an angle from degrees to radians as `π · degrees / 180`.
pub fn deg_to_rad(degrees: f64) -> f64 {
    PI * degrees / 180.0
}

/// One output record.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Vec2Record {
    /// Vertex with coordinates in radians.
    Vertex(Coord),
    /// End of a line string.
    Terminator,
}

impl Vec2Record {
    /// Creates a vertex record from coordinates in degrees.
    pub fn from_degrees(coord: &Coord) -> Self {
        Self::Vertex(Coord::new(deg_to_rad(coord.x), deg_to_rad(coord.y)))
    }
}

impl fmt::Display for Vec2Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vec2Record::Vertex(c) => write!(f, "vec2({:.6}, {:.6}),", c.x, c.y),
            Vec2Record::Terminator => write!(f, "vec2(0., 0.),"),
        }
    }
}

/// Iterates over the records of all lines: vertices of each line followed by a terminator.
pub fn records(lines: &MultiLineString) -> impl Iterator<Item = Vec2Record> + '_ {
    lines.lines().iter().flat_map(|line| {
        line.iter_points()
            .map(Vec2Record::from_degrees)
            .chain(std::iter::once(Vec2Record::Terminator))
    })
}

/// Writes all records into `writer`, one record per line.
pub fn write_vec2<W: Write>(writer: &mut W, lines: &MultiLineString) -> std::io::Result<()> {
    let mut count = 0usize;
    for record in records(lines) {
        writeln!(writer, "{record}")?;
        count += 1;
    }

    log::debug!("Written {count} vec2 records for {} lines", lines.len());

    Ok(())
}
