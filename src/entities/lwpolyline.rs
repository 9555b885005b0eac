//! Lightweight polyline entity

use super::{EntityCommon, Line};
use crate::types::Point;

/// A lightweight polyline
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LwPolyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Vertices in file order
    pub points: Vec<Point>,
    /// Is the polyline closed? (code 70, bit 0)
    pub closed: bool,
}

impl LwPolyline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an open polyline from a list of points
    pub fn from_points(points: Vec<Point>) -> Self {
        LwPolyline {
            points,
            ..Self::new()
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Segments between consecutive vertices.
    ///
    /// The closing segment of a closed polyline is not included.
    pub fn lines(&self) -> Vec<Line> {
        self.points
            .windows(2)
            .map(|pair| Line::new(pair[0], pair[1]))
            .collect()
    }
}

impl_entity!(LwPolyline, "LWPOLYLINE");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_do_not_close_loop() {
        let mut polyline = LwPolyline::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ]);
        polyline.closed = true;

        let lines = polyline.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].first(), Point::new(0.0, 0.0));
        assert_eq!(lines[1].last(), Point::new(1.0, 1.0));
    }

    #[test]
    fn test_degenerate_polylines() {
        assert!(LwPolyline::new().lines().is_empty());
        assert!(LwPolyline::from_points(vec![Point::ORIGIN]).lines().is_empty());
    }
}
