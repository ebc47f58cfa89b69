use geo::Simplify;
use linework_types::{
    Coord, Geom, GeometryCollection, LineString, MultiLineString, MultiPolygon, Polygon,
};

use crate::error::LineworkError;

/// Polyline vertex reduction.
///
/// Implementations must return a geometry of the same shape as the input: same variant, same number of members in
/// every container. Only the number of vertices in line strings and rings may change.
pub trait Simplifier {
    /// Returns a simplified copy of the geometry.
    fn simplify(&self, geom: &Geom) -> Result<Geom, LineworkError>;
}

/// Ramer-Douglas-Peucker simplification.
///
/// `tolerance` is the maximum distance (in units of the input coordinates) a removed vertex can be from the
/// simplified line. Every line string and polygon ring is simplified independently, points are left as they are.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DouglasPeucker {
    /// Distance threshold.
    pub tolerance: f64,
}

impl DouglasPeucker {
    /// Creates a new simplifier with the given tolerance.
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Non-finite vertices split the line into runs that are simplified separately. The splitting vertices
    /// themselves are kept in place, so degenerate ones are left for the pruner.
    fn simplify_line(&self, line: &LineString) -> LineString {
        let points = line.points();
        let mut simplified = Vec::with_capacity(points.len());
        let mut run_start = 0;

        for (index, point) in points.iter().enumerate() {
            if !point.is_finite() {
                self.simplify_run(&points[run_start..index], &mut simplified);
                simplified.push(*point);
                run_start = index + 1;
            }
        }
        self.simplify_run(&points[run_start..], &mut simplified);

        LineString::from(simplified)
    }

    fn simplify_run(&self, run: &[Coord], out: &mut Vec<Coord>) {
        if run.len() < 3 {
            out.extend_from_slice(run);
            return;
        }

        let line = geo_types::LineString::from(LineString::from(run.to_vec()));
        out.extend(LineString::from(line.simplify(&self.tolerance)).into_inner());
    }

    fn simplify_lines(&self, lines: &[LineString]) -> Vec<LineString> {
        lines.iter().map(|line| self.simplify_line(line)).collect()
    }

    fn simplify_polygon(&self, polygon: &Polygon) -> Polygon {
        Polygon::from(self.simplify_lines(polygon.rings()))
    }

    fn simplify_geom(&self, geom: &Geom) -> Geom {
        match geom {
            Geom::Point(_) | Geom::MultiPoint(_) => geom.clone(),
            Geom::LineString(line) => Geom::LineString(self.simplify_line(line)),
            Geom::MultiLineString(mls) => {
                Geom::MultiLineString(MultiLineString::from(self.simplify_lines(mls.lines())))
            }
            Geom::Polygon(polygon) => Geom::Polygon(self.simplify_polygon(polygon)),
            Geom::MultiPolygon(mp) => Geom::MultiPolygon(MultiPolygon::from(
                mp.parts()
                    .iter()
                    .map(|p| self.simplify_polygon(p))
                    .collect::<Vec<_>>(),
            )),
            Geom::GeometryCollection(collection) => Geom::GeometryCollection(
                collection
                    .members()
                    .iter()
                    .map(|member| self.simplify_geom(member))
                    .collect::<GeometryCollection>(),
            ),
        }
    }
}

impl Simplifier for DouglasPeucker {
    fn simplify(&self, geom: &Geom) -> Result<Geom, LineworkError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(LineworkError::Simplify(format!(
                "tolerance must be a finite non-negative number, got {}",
                self.tolerance
            )));
        }

        Ok(self.simplify_geom(geom))
    }
}
