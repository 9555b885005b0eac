//! Line entity

use super::EntityCommon;
use crate::types::{Axis, PartialPoint, Point};

/// A line segment.
///
/// The end points are stored axis by axis so a line read from DXF can be
/// filled in one group code at a time; [`Line::first`] and [`Line::last`]
/// compose the points on read, dropping trailing axes that were never set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub common: EntityCommon,
    start: PartialPoint,
    end: PartialPoint,
}

impl Line {
    /// Create a line from two points
    pub fn new(first: Point, last: Point) -> Self {
        Line {
            common: EntityCommon::new(),
            start: first.into(),
            end: last.into(),
        }
    }

    /// Create a line with no axes set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start point (codes 10/20/30)
    pub fn first(&self) -> Point {
        self.start.to_point().unwrap_or(Point::ORIGIN)
    }

    /// End point (codes 11/21/31)
    pub fn last(&self) -> Point {
        self.end.to_point().unwrap_or(Point::ORIGIN)
    }

    /// Set one axis of the start point
    pub fn set_first_axis(&mut self, axis: Axis, value: f64) {
        self.start.set(axis, value);
    }

    /// Set one axis of the end point
    pub fn set_last_axis(&mut self, axis: Axis, value: f64) {
        self.end.set(axis, value);
    }

    pub fn set_x1(&mut self, value: f64) {
        self.start.set(Axis::X, value);
    }

    pub fn set_y1(&mut self, value: f64) {
        self.start.set(Axis::Y, value);
    }

    pub fn set_z1(&mut self, value: f64) {
        self.start.set(Axis::Z, value);
    }

    pub fn set_x2(&mut self, value: f64) {
        self.end.set(Axis::X, value);
    }

    pub fn set_y2(&mut self, value: f64) {
        self.end.set(Axis::Y, value);
    }

    pub fn set_z2(&mut self, value: f64) {
        self.end.set(Axis::Z, value);
    }

    pub fn length(&self) -> f64 {
        self.first().distance(&self.last())
    }
}

impl_entity!(Line, "LINE");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(line.first(), Point::new(0.0, 0.0));
        assert_eq!(line.last(), Point::new(3.0, 4.0));
        assert_eq!(line.length(), 5.0);
    }

    #[test]
    fn test_axis_fields_compose_lazily() {
        let mut line = Line::empty();
        line.set_y2(1.0);
        line.set_x1(0.0);
        line.set_x2(1.0);
        line.set_y1(0.0);
        assert_eq!(line.first().dimension(), 2);
        assert_eq!(line.last(), Point::new(1.0, 1.0));

        line.set_z2(2.0);
        assert_eq!(line.last(), Point::new_3d(1.0, 1.0, 2.0));
        assert_eq!(line.first().z(), None);
    }
}
