use serde::{Deserialize, Serialize};

use crate::impls::line_string::LineString;

/// A set of line strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiLineString(Vec<LineString>);

impl MultiLineString {
    /// Line strings of the set.
    pub fn lines(&self) -> &[LineString] {
        &self.0
    }

    /// Number of line strings in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set has no line strings.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the inner vector of line strings.
    pub fn into_inner(self) -> Vec<LineString> {
        self.0
    }

    /// Keeps only the line strings that have more than `min_vertices` vertices.
    ///
    /// A line with `min_vertices` vertices or fewer is considered visually negligible and is dropped. Relative order
    /// of the remaining lines does not change.
    ///
    /// ```
    /// use linework_types::{coord, LineString, MultiLineString};
    ///
    /// let lines = MultiLineString::from(vec![
    ///     LineString::from(vec![coord!(0.0, 0.0), coord!(1.0, 1.0)]),
    ///     LineString::from(vec![coord!(0.0, 0.0), coord!(1.0, 1.0), coord!(2.0, 0.0)]),
    /// ]);
    ///
    /// assert_eq!(lines.filter_short(2).len(), 1);
    /// ```
    pub fn filter_short(&self, min_vertices: usize) -> MultiLineString {
        self.0
            .iter()
            .filter(|line| line.len() > min_vertices)
            .cloned()
            .collect()
    }
}

impl From<Vec<LineString>> for MultiLineString {
    fn from(value: Vec<LineString>) -> Self {
        Self(value)
    }
}

impl FromIterator<LineString> for MultiLineString {
    fn from_iter<T: IntoIterator<Item = LineString>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{coord, PointCount};

    fn line(len: usize) -> LineString {
        (0..len).map(|i| coord!(i as f64, 0.0)).collect()
    }

    #[test]
    fn filter_short_keeps_order() {
        let lines = MultiLineString::from(vec![line(3), line(1), line(5), line(2), line(4)]);
        let filtered = lines.filter_short(2);

        let lengths: Vec<usize> = filtered.lines().iter().map(|l| l.len()).collect();
        assert_eq!(lengths, vec![3, 5, 4]);
    }

    #[test]
    fn filter_short_threshold_is_strict() {
        let lines = MultiLineString::from(vec![line(2), line(3)]);
        assert_eq!(lines.filter_short(3).len(), 0);
        assert_eq!(lines.filter_short(2).len(), 1);
        assert_eq!(lines.filter_short(0).len(), 2);
    }

    #[test]
    fn filter_short_keeps_empty_lines_out() {
        let lines = MultiLineString::from(vec![line(0), line(1)]);
        assert!(lines.filter_short(0).lines().iter().all(|l| !l.is_empty()));
    }

    #[test]
    fn filter_short_never_adds_points() {
        let lines = MultiLineString::from(vec![line(1), line(2), line(3), line(7)]);
        for k in 0..10 {
            let filtered = lines.filter_short(k);
            assert!(filtered.point_count() <= lines.point_count());
            assert!(filtered.lines().iter().all(|l| l.len() > k));
        }
    }

    #[test]
    fn filter_short_of_empty() {
        assert!(MultiLineString::default().filter_short(2).is_empty());
    }
}
