//! Circle entity

use super::EntityCommon;
use crate::types::Point;

/// A circle entity
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point (codes 10/20/30)
    pub center: Point,
    /// Radius (code 40)
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Circle {
            common: EntityCommon::new(),
            center,
            radius,
        }
    }

    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }
}

impl Default for Circle {
    fn default() -> Self {
        Circle::new(Point::ORIGIN, 0.0)
    }
}

impl_entity!(Circle, "CIRCLE");
