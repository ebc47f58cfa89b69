use crate::impls::{
    GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon,
};
use crate::{Coord, Geom};

/// Removal of degenerate coordinates and empty containers.
///
/// Pruning works bottom-up: degenerate coordinates (see [`Coord::is_degenerate`]) are dropped first, then every
/// container that has no members left is dropped from its parent. If nothing survives, `None` is returned, so an empty
/// geometry is never represented by a zero-length container.
///
/// Surviving members keep their relative order, and pruning an already pruned geometry returns an equal geometry.
pub trait RemoveEmpty {
    /// Type of the pruned geometry.
    type Output;

    /// Returns a copy of the geometry without degenerate and empty parts, or `None` if nothing is left.
    fn remove_empty(&self) -> Option<Self::Output>;
}

fn prune_all<'a, T>(members: impl IntoIterator<Item = &'a T>) -> Option<Vec<T::Output>>
where
    T: RemoveEmpty + 'a,
{
    let pruned: Vec<_> = members
        .into_iter()
        .filter_map(|member| member.remove_empty())
        .collect();

    if pruned.is_empty() {
        None
    } else {
        Some(pruned)
    }
}

impl RemoveEmpty for Coord {
    type Output = Coord;

    fn remove_empty(&self) -> Option<Coord> {
        if self.is_degenerate() {
            None
        } else {
            Some(*self)
        }
    }
}

impl RemoveEmpty for MultiPoint {
    type Output = MultiPoint;

    fn remove_empty(&self) -> Option<MultiPoint> {
        prune_all(self.points()).map(MultiPoint::from)
    }
}

impl RemoveEmpty for LineString {
    type Output = LineString;

    fn remove_empty(&self) -> Option<LineString> {
        prune_all(self.points()).map(LineString::from)
    }
}

impl RemoveEmpty for MultiLineString {
    type Output = MultiLineString;

    fn remove_empty(&self) -> Option<MultiLineString> {
        prune_all(self.lines()).map(MultiLineString::from)
    }
}

impl RemoveEmpty for Polygon {
    type Output = Polygon;

    fn remove_empty(&self) -> Option<Polygon> {
        prune_all(self.rings()).map(Polygon::from)
    }
}

impl RemoveEmpty for MultiPolygon {
    type Output = MultiPolygon;

    fn remove_empty(&self) -> Option<MultiPolygon> {
        prune_all(self.parts()).map(MultiPolygon::from)
    }
}

impl RemoveEmpty for GeometryCollection {
    type Output = GeometryCollection;

    fn remove_empty(&self) -> Option<GeometryCollection> {
        prune_all(self.members()).map(GeometryCollection::from)
    }
}

impl RemoveEmpty for Geom {
    type Output = Geom;

    fn remove_empty(&self) -> Option<Geom> {
        match self {
            Geom::Point(v) => v.remove_empty().map(Geom::from),
            Geom::MultiPoint(v) => v.remove_empty().map(Geom::from),
            Geom::LineString(v) => v.remove_empty().map(Geom::from),
            Geom::MultiLineString(v) => v.remove_empty().map(Geom::from),
            Geom::Polygon(v) => v.remove_empty().map(Geom::from),
            Geom::MultiPolygon(v) => v.remove_empty().map(Geom::from),
            Geom::GeometryCollection(v) => v.remove_empty().map(Geom::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{coord, PointCount};
    use assert_matches::assert_matches;

    const NAN: f64 = f64::NAN;

    fn no_degenerate(geom: &Geom) -> bool {
        match geom {
            Geom::Point(c) => !c.is_degenerate(),
            Geom::MultiPoint(v) => !v.is_empty() && v.points().iter().all(|c| !c.is_degenerate()),
            Geom::LineString(v) => !v.is_empty() && v.iter().all(|c| !c.is_degenerate()),
            Geom::MultiLineString(v) => {
                !v.is_empty() && v.lines().iter().all(|l| no_degenerate(&l.clone().into()))
            }
            Geom::Polygon(v) => {
                !v.rings().is_empty() && v.rings().iter().all(|l| no_degenerate(&l.clone().into()))
            }
            Geom::MultiPolygon(v) => {
                !v.parts().is_empty() && v.parts().iter().all(|p| no_degenerate(&p.clone().into()))
            }
            Geom::GeometryCollection(v) => !v.is_empty() && v.members().iter().all(no_degenerate),
        }
    }

    fn sample() -> Geom {
        let line = LineString::from(vec![coord!(0.0, 0.0), coord!(NAN, 1.0), coord!(2.0, 2.0)]);
        let nan_line = LineString::from(vec![coord!(NAN, NAN), coord!(1.0, NAN)]);
        let polygon = Polygon::new(
            LineString::from(vec![coord!(0.0, 0.0), coord!(1.0, 0.0), coord!(1.0, 1.0)]),
            vec![nan_line.clone(), LineString::default()],
        );

        Geom::from(GeometryCollection::from(vec![
            Geom::from(coord!(NAN, 0.0)),
            Geom::from(MultiPoint::from(vec![coord!(1.0, 1.0), coord!(0.0, NAN)])),
            Geom::from(MultiLineString::from(vec![
                nan_line.clone(),
                line,
                LineString::default(),
            ])),
            Geom::from(MultiPolygon::from(vec![
                Polygon::from(nan_line),
                polygon,
                Polygon::default(),
            ])),
            Geom::from(MultiLineString::default()),
        ]))
    }

    #[test]
    fn point() {
        assert_eq!(
            Geom::Point(coord!(1.0, 2.0)).remove_empty(),
            Some(Geom::Point(coord!(1.0, 2.0)))
        );
        assert_eq!(Geom::Point(coord!(NAN, 2.0)).remove_empty(), None);
        assert_eq!(Geom::Point(coord!(1.0, NAN)).remove_empty(), None);
    }

    #[test]
    fn line_string_drops_degenerate_points_in_order() {
        let line = LineString::from(vec![
            coord!(0.0, 0.0),
            coord!(NAN, 0.0),
            coord!(1.0, 1.0),
            coord!(0.0, NAN),
            coord!(2.0, 0.0),
        ]);

        assert_eq!(
            line.remove_empty(),
            Some(LineString::from(vec![
                coord!(0.0, 0.0),
                coord!(1.0, 1.0),
                coord!(2.0, 0.0)
            ]))
        );
    }

    #[test]
    fn empty_containers_become_none() {
        assert_eq!(LineString::default().remove_empty(), None);
        assert_eq!(MultiPoint::default().remove_empty(), None);
        assert_eq!(MultiLineString::default().remove_empty(), None);
        assert_eq!(Polygon::default().remove_empty(), None);
        assert_eq!(MultiPolygon::default().remove_empty(), None);
        assert_eq!(GeometryCollection::default().remove_empty(), None);

        let only_nan = LineString::from(vec![coord!(NAN, 0.0), coord!(NAN, NAN)]);
        assert_eq!(only_nan.remove_empty(), None);
        assert_eq!(
            MultiLineString::from(vec![only_nan.clone(), LineString::default()]).remove_empty(),
            None
        );
        assert_eq!(
            MultiPolygon::from(vec![Polygon::from(only_nan)]).remove_empty(),
            None
        );
    }

    #[test]
    fn polygon_keeps_surviving_rings() {
        let exterior = LineString::from(vec![coord!(NAN, 0.0)]);
        let hole = LineString::from(vec![coord!(0.0, 0.0), coord!(1.0, 0.0), coord!(0.0, 1.0)]);
        let polygon = Polygon::new(exterior, vec![hole.clone()]);

        let pruned = polygon.remove_empty().expect("polygon is not empty");
        assert_eq!(pruned.rings(), &[hole]);
    }

    #[test]
    fn nested_geometry() {
        let pruned = sample().remove_empty().expect("geometry is not empty");

        let members = assert_matches!(&pruned, Geom::GeometryCollection(c) => c.members());
        assert_eq!(members.len(), 3);
        assert_matches!(&members[0], Geom::MultiPoint(mp) if mp.points() == [coord!(1.0, 1.0)]);
        assert_matches!(&members[1], Geom::MultiLineString(mls) if mls.len() == 1);
        assert_matches!(&members[2], Geom::MultiPolygon(mp) if mp.len() == 1 && mp.parts()[0].len() == 1);
        assert_eq!(pruned.point_count(), 1 + 2 + 3);
    }

    #[test]
    fn pruned_geometry_has_no_degenerate_parts() {
        let pruned = sample().remove_empty().expect("geometry is not empty");
        assert!(no_degenerate(&pruned));
    }

    #[test]
    fn pruning_is_idempotent() {
        let once = sample().remove_empty();
        let twice = once.as_ref().and_then(RemoveEmpty::remove_empty);
        assert_eq!(once, twice);

        let clean = Geom::from(MultiLineString::from(vec![LineString::from(vec![
            coord!(0.0, 0.0),
            coord!(1.0, 1.0),
        ])]));
        assert_eq!(clean.remove_empty(), Some(clean.clone()));
    }
}
