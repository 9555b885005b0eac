//! Spline entity (NURBS curve)

use super::{is_single_bezier_segment, Bezier, EntityCommon, EntityType};
use crate::types::Point;
use bitflags::bitflags;

bitflags! {
    /// Spline flags (code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SplineFlags: i64 {
        const CLOSED = 1;
        const PERIODIC = 2;
        const RATIONAL = 4;
        const PLANAR = 8;
        const LINEAR = 16;
    }
}

impl SplineFlags {
    /// Unpack the low five bits of a code 70 value
    pub fn from_code_value(value: i64) -> Self {
        SplineFlags::from_bits_truncate(value)
    }

    pub fn closed(&self) -> bool {
        self.contains(SplineFlags::CLOSED)
    }

    pub fn periodic(&self) -> bool {
        self.contains(SplineFlags::PERIODIC)
    }

    pub fn rational(&self) -> bool {
        self.contains(SplineFlags::RATIONAL)
    }

    pub fn planar(&self) -> bool {
        self.contains(SplineFlags::PLANAR)
    }

    pub fn linear(&self) -> bool {
        self.contains(SplineFlags::LINEAR)
    }
}

/// A spline entity
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    /// Common entity data
    pub common: EntityCommon,
    /// Degree of the spline (code 71)
    pub degree: i64,
    /// Spline flags
    pub flags: SplineFlags,
    /// Knot values in file order
    pub knots: Vec<f64>,
    /// Control points
    pub points: Vec<Point>,
    /// Weights (rational splines only)
    pub weights: Vec<f64>,
    /// Fit points
    pub fit_points: Vec<Point>,
    pub start_tangent: Option<Point>,
    pub end_tangent: Option<Point>,
    pub knot_tolerance: Option<f64>,
    pub control_tolerance: Option<f64>,
    pub fit_tolerance: Option<f64>,
}

impl Spline {
    pub fn new(degree: i64, knots: Vec<f64>, points: Vec<Point>) -> Self {
        Spline {
            common: EntityCommon::new(),
            degree,
            flags: SplineFlags::empty(),
            knots,
            points,
            weights: Vec::new(),
            fit_points: Vec::new(),
            start_tangent: None,
            end_tangent: None,
            knot_tolerance: None,
            control_tolerance: None,
            fit_tolerance: None,
        }
    }

    pub fn control_point_count(&self) -> usize {
        self.points.len()
    }

    /// True when the knot vector has no interior knots, so the spline is a
    /// single Bézier segment over its control points
    pub fn is_bezier(&self) -> bool {
        is_single_bezier_segment(&self.knots, self.points.len())
    }

    /// Turn the spline into the most specific entity that represents it.
    ///
    /// A spline with a single-segment knot vector becomes a [`Bezier`] and its
    /// knots and weights are discarded.
    pub fn into_entity(self) -> EntityType {
        if self.is_bezier() {
            EntityType::Bezier(Bezier {
                common: self.common,
                points: self.points,
                flags: self.flags,
            })
        } else {
            EntityType::Spline(self)
        }
    }
}

impl Default for Spline {
    fn default() -> Self {
        Spline::new(3, Vec::new(), Vec::new())
    }
}

impl_entity!(Spline, "SPLINE");

#[cfg(test)]
mod tests {
    use super::*;

    fn square_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(3.0, 0.0),
        ]
    }

    #[test]
    fn test_flag_unpacking() {
        let flags = SplineFlags::from_code_value(8 | 1);
        assert!(flags.closed());
        assert!(flags.planar());
        assert!(!flags.periodic());
        assert!(!flags.rational());
        assert!(!flags.linear());
        assert_eq!(SplineFlags::from_code_value(0b11111).bits(), 31);
    }

    #[test]
    fn test_clamped_knots_become_bezier() {
        let knots = vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0];
        let spline = Spline::new(3, knots, square_points());
        match spline.into_entity() {
            EntityType::Bezier(bezier) => assert_eq!(bezier.points, square_points()),
            other => panic!("expected Bezier, got {:?}", other),
        }
    }

    #[test]
    fn test_non_uniform_tail_stays_spline() {
        let knots = vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0];
        let spline = Spline::new(3, knots.clone(), square_points());
        match spline.into_entity() {
            EntityType::Spline(spline) => assert_eq!(spline.knots, knots),
            other => panic!("expected Spline, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_spline_stays_spline() {
        assert!(matches!(Spline::default().into_entity(), EntityType::Spline(_)));
    }
}
