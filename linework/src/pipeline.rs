use linework_types::{
    flatten, Geom, GeometryKind, LineworkTypesError, MultiLineString, PointCount, RemoveEmpty,
};
use serde::{Deserialize, Serialize};

use crate::error::LineworkError;
use crate::simplify::{DouglasPeucker, Simplifier};

/// Default simplification tolerance, in units of the input coordinates.
pub const DEFAULT_TOLERANCE: f64 = 6.0;
/// Default vertex threshold. Lines with this many vertices or fewer are dropped.
pub const DEFAULT_MIN_VERTICES: usize = 2;

/// Parameters of the [`Pipeline`].
#[derive(Debug, Copy, Clone, PartialEq, Deserialize, Serialize)]
pub struct PipelineOptions {
    /// Tolerance of the default Douglas-Peucker simplifier.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Lines must have more vertices than this to be kept.
    #[serde(default = "default_min_vertices")]
    pub min_vertices: usize,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_min_vertices() -> usize {
    DEFAULT_MIN_VERTICES
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            min_vertices: DEFAULT_MIN_VERTICES,
        }
    }
}

/// Result of a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Lines left after all the stages.
    pub lines: MultiLineString,
    /// Number of vertices after flattening, before simplification.
    pub points_before: usize,
    /// Number of vertices in the output lines.
    pub points_after: usize,
}

/// Sequence of transformations turning an input collection into render-ready lines.
///
/// Stages run in fixed order: flatten, simplify, remove empty, filter short lines. The pipeline holds no state between
/// runs, so a single instance can process any number of geometries.
#[derive(Debug, Clone)]
pub struct Pipeline<S = DouglasPeucker> {
    options: PipelineOptions,
    simplifier: S,
}

impl Pipeline<DouglasPeucker> {
    /// Creates a pipeline with Douglas-Peucker simplification using `options.tolerance`.
    pub fn new(options: PipelineOptions) -> Self {
        Self {
            simplifier: DouglasPeucker::new(options.tolerance),
            options,
        }
    }
}

impl<S: Simplifier> Pipeline<S> {
    /// Creates a pipeline with a custom simplifier. `options.tolerance` is not used in this case.
    pub fn with_simplifier(options: PipelineOptions, simplifier: S) -> Self {
        Self {
            options,
            simplifier,
        }
    }

    /// Options of the pipeline.
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Processes the geometry.
    ///
    /// The input must be a collection of multi line strings. Any error stops the run and is returned as is, there is no
    /// partial result.
    pub fn run(&self, geom: &Geom) -> Result<PipelineOutput, LineworkError> {
        let flat = flatten(geom)?;
        let points_before = flat.point_count();
        log::debug!(
            "Flattened input into {} lines with {points_before} points",
            flat.len()
        );

        let simplified = self.simplifier.simplify(&Geom::MultiLineString(flat))?;
        log::debug!(
            "Simplified geometry has {} points",
            simplified.point_count()
        );

        let pruned = match simplified.remove_empty() {
            Some(Geom::MultiLineString(lines)) => lines,
            Some(other) => {
                return Err(LineworkTypesError::ContractViolation {
                    expected: GeometryKind::MultiLineString,
                    found: other.kind(),
                }
                .into())
            }
            None => MultiLineString::default(),
        };

        let lines = pruned.filter_short(self.options.min_vertices);
        let points_after = lines.point_count();
        log::info!(
            "Reduced {points_before} points to {points_after} points in {} lines",
            lines.len()
        );

        Ok(PipelineOutput {
            lines,
            points_before,
            points_after,
        })
    }
}
