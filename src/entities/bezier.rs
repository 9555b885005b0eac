//! Bézier curve entity and the knot-vector test that recognizes one

use super::{EntityCommon, Line, SplineFlags};
use crate::types::Point;

/// A single-segment Bézier curve.
///
/// Read from a SPLINE whose knot vector has no interior knots; the degree is
/// implied by the number of control points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bezier {
    pub common: EntityCommon,
    /// Control points
    pub points: Vec<Point>,
    /// Flags of the SPLINE this curve was read from
    pub flags: SplineFlags,
}

impl Bezier {
    pub fn new(points: Vec<Point>) -> Self {
        Bezier {
            common: EntityCommon::new(),
            points,
            flags: SplineFlags::empty(),
        }
    }

    /// Degree of the curve (one less than the number of control points)
    pub fn degree(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Evaluate the curve at `t`.
    ///
    /// Returns `None` for `t` outside `[0, 1]` or a curve without points.
    pub fn point_at(&self, t: f64) -> Option<Point> {
        if !(0.0..=1.0).contains(&t) || self.points.is_empty() {
            return None;
        }

        let degree = self.degree();
        let dimension = self.points.iter().map(Point::dimension).max().unwrap_or(0);
        let mut sum = [0.0; 3];
        for (i, point) in self.points.iter().enumerate() {
            let weight = binomial(degree as u64, i as u64)
                * (1.0 - t).powi((degree - i) as i32)
                * t.powi(i as i32);
            let coords = point.to_array();
            for axis in 0..3 {
                sum[axis] += coords[axis] * weight;
            }
        }
        Some(Point::with_dimension(sum, dimension))
    }

    /// Tessellate into `count` consecutive segments.
    ///
    /// Samples `count + 1` evenly spaced parameters; the polyline is not closed.
    pub fn lines(&self, count: usize) -> Vec<Line> {
        if count == 0 || self.points.is_empty() {
            return Vec::new();
        }
        let samples: Vec<Point> = (0..=count)
            .filter_map(|i| self.point_at(i as f64 / count as f64))
            .collect();
        samples
            .windows(2)
            .map(|pair| Line::new(pair[0], pair[1]))
            .collect()
    }
}

impl_entity!(Bezier, "SPLINE");

/// Binomial coefficient `C(n, k)`, accumulated left to right in floating
/// point so high degrees do not overflow. Exact while the result fits in 53
/// bits.
pub fn binomial(n: u64, k: u64) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// Whether a knot vector describes exactly one Bézier segment over
/// `control_points` control points: `2n` knots, the first `n` all zero and the
/// last `n` all equal.
pub fn is_single_bezier_segment(knots: &[f64], control_points: usize) -> bool {
    let n = control_points;
    if n == 0 || knots.len() != 2 * n {
        return false;
    }
    let (head, tail) = knots.split_at(n);
    head.iter().all(|k| *k == 0.0) && tail.iter().all(|k| *k == tail[0])
}
