//! Arc entity

use super::EntityCommon;
use crate::types::Point;

/// A circular arc.
///
/// Shares the circle's fields and adds the angles, which are in degrees and
/// run counter-clockwise from the start angle to the end angle.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub common: EntityCommon,
    pub center: Point,
    pub radius: f64,
    /// Start angle in degrees (code 50)
    pub start_angle: f64,
    /// End angle in degrees (code 51)
    pub end_angle: f64,
}

impl Arc {
    pub fn new(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Arc {
            common: EntityCommon::new(),
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    /// Included angle in degrees, in `[0, 360)`
    pub fn sweep(&self) -> f64 {
        (self.end_angle - self.start_angle).rem_euclid(360.0)
    }

    pub fn start_point(&self) -> Point {
        self.point_at_angle(self.start_angle)
    }

    pub fn end_point(&self) -> Point {
        self.point_at_angle(self.end_angle)
    }

    fn point_at_angle(&self, degrees: f64) -> Point {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.center + Point::new(self.radius * cos, self.radius * sin)
    }
}

impl Default for Arc {
    fn default() -> Self {
        Arc::new(Point::ORIGIN, 0.0, 0.0, 0.0)
    }
}

impl_entity!(Arc, "ARC");
