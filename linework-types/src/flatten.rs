use crate::error::LineworkTypesError;
use crate::impls::{GeometryCollection, MultiLineString};
use crate::{Geom, GeometryKind};

impl GeometryCollection {
    /// Merges all members of the collection into a single multi line string.
    ///
    /// Every member must be a [`Geom::MultiLineString`]. Line strings are concatenated in the order of members, and
    /// then in the order inside each member. If any member is of another type, the whole operation fails with
    /// [`LineworkTypesError::ContractViolation`] naming the offending variant.
    pub fn flatten_lines(&self) -> Result<MultiLineString, LineworkTypesError> {
        let mut lines = Vec::with_capacity(self.members().iter().map(member_len).sum());
        for member in self.members() {
            match member {
                Geom::MultiLineString(mls) => lines.extend(mls.lines().iter().cloned()),
                other => {
                    return Err(LineworkTypesError::ContractViolation {
                        expected: GeometryKind::MultiLineString,
                        found: other.kind(),
                    })
                }
            }
        }

        Ok(MultiLineString::from(lines))
    }
}

fn member_len(member: &Geom) -> usize {
    match member {
        Geom::MultiLineString(mls) => mls.len(),
        _ => 0,
    }
}

/// Flattens a collection of multi line strings into one multi line string.
///
/// The geometry must be a [`Geom::GeometryCollection`] of [`Geom::MultiLineString`] members. Any other shape is a
/// contract violation and is never coerced.
///
/// ```
/// use linework_types::{coord, flatten, Geom, GeometryCollection, LineString, MultiLineString};
///
/// let a = LineString::from(vec![coord!(0.0, 0.0), coord!(1.0, 0.0)]);
/// let b = LineString::from(vec![coord!(2.0, 0.0), coord!(3.0, 0.0)]);
/// let collection = GeometryCollection::from(vec![
///     Geom::from(MultiLineString::from(vec![a.clone()])),
///     Geom::from(MultiLineString::from(vec![b.clone()])),
/// ]);
///
/// let flat = flatten(&Geom::from(collection)).unwrap();
/// assert_eq!(flat.lines(), &[a, b]);
/// ```
pub fn flatten(geom: &Geom) -> Result<MultiLineString, LineworkTypesError> {
    match geom {
        Geom::GeometryCollection(collection) => collection.flatten_lines(),
        other => Err(LineworkTypesError::ContractViolation {
            expected: GeometryKind::GeometryCollection,
            found: other.kind(),
        }),
    }
}
