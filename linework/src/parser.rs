use geozero::wkt::Wkt;
use geozero::ToGeo;
use linework_types::Geom;

use crate::error::LineworkError;

/// Source of the geometry to process.
pub trait GeometryParser {
    /// Parses textual representation of a geometry.
    fn parse(&self, input: &str) -> Result<Geom, LineworkError>;
}

/// Reads geometries in Well-Known Text format.
///
/// Any reader failure is returned as [`LineworkError::Parse`] with the reader's message. Geometries that have no
/// counterpart in the model (e.g. `TRIANGLE`) are reported as [`LineworkError::ContractViolation`].
#[derive(Debug, Default, Copy, Clone)]
pub struct WktParser;

impl GeometryParser for WktParser {
    fn parse(&self, input: &str) -> Result<Geom, LineworkError> {
        let geometry = Wkt(input.trim()).to_geo()?;
        log::debug!("Parsed {} bytes of WKT", input.len());

        Ok(Geom::try_from(geometry)?)
    }
}
