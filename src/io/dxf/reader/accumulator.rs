//! Accumulators for entities that repeat the same group codes once per point
//!
//! There is no explicit vertex index in the file. The n-th occurrence of an
//! X code belongs to point n, independently of where the Y and Z codes of
//! that point appear, so every axis keeps its own occurrence counter.

use super::stream_reader::DxfCodePair;
use crate::entities::{EntityCommon, EntityType, LwPolyline, Spline, SplineFlags};
use crate::error::{DxfError, Result};
use crate::io::dxf::coordinate_axis;
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::{Axis, PartialPoint, Point};

/// Rebuilds an ordered list of points from per-axis values
#[derive(Debug, Clone, Default)]
pub struct PointAccumulator {
    points: Vec<PartialPoint>,
    counters: [usize; 3],
}

impl PointAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` as `axis` of the next point that has no value for it yet
    pub fn push(&mut self, axis: Axis, value: f64) {
        let index = self.counters[axis.index()];
        if index >= self.points.len() {
            self.points.resize(index + 1, PartialPoint::new());
        }
        self.points[index].set(axis, value);
        self.counters[axis.index()] += 1;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The accumulated points; a point keeps only the axes it received,
    /// dropping trailing ones
    pub fn into_points(self) -> Vec<Point> {
        self.points.iter().filter_map(PartialPoint::to_point).collect()
    }
}

/// Accumulator for LWPOLYLINE
#[derive(Debug, Clone, Default)]
pub struct LwPolylineAccumulator {
    pub common: EntityCommon,
    vertex_count: Option<i64>,
    closed: bool,
    points: PointAccumulator,
}

impl LwPolylineAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume a pair; returns `false` when the code is not one of ours
    pub fn parse_pair(&mut self, pair: &DxfCodePair) -> Result<bool> {
        match pair.code {
            90 => self.vertex_count = Some(pair.as_i64()?),
            70 => self.closed = pair.as_i64()? & 1 != 0,
            10 | 20 | 30 => match coordinate_axis(pair.code) {
                Some(axis) => self.points.push(axis, pair.as_f64()?),
                None => return Ok(false),
            },
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Finish the polyline.
    ///
    /// A declared vertex count that disagrees with the vertices read is
    /// reported, not rejected.
    pub fn to_entity(self, notifications: &mut NotificationCollection) -> LwPolyline {
        let points = self.points.into_points();
        if let Some(declared) = self.vertex_count {
            if declared != points.len() as i64 {
                notifications.notify(
                    NotificationType::Warning,
                    format!(
                        "LWPOLYLINE declares {} vertices but {} were read",
                        declared,
                        points.len()
                    ),
                );
            }
        }
        LwPolyline {
            common: self.common,
            points,
            closed: self.closed,
        }
    }
}

/// Accumulator for SPLINE
#[derive(Debug, Clone, Default)]
pub struct SplineAccumulator {
    pub common: EntityCommon,
    flags: SplineFlags,
    degree: Option<i64>,
    knot_count: Option<i64>,
    control_point_count: Option<i64>,
    fit_point_count: Option<i64>,
    knots: Vec<f64>,
    weights: Vec<f64>,
    knot_tolerance: Option<f64>,
    control_tolerance: Option<f64>,
    fit_tolerance: Option<f64>,
    control_points: PointAccumulator,
    fit_points: PointAccumulator,
    start_tangent: PartialPoint,
    end_tangent: PartialPoint,
}

impl SplineAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume a pair; returns `false` when the code is not one of ours
    pub fn parse_pair(&mut self, pair: &DxfCodePair) -> Result<bool> {
        match pair.code {
            70 => self.flags = SplineFlags::from_code_value(pair.as_i64()?),
            71 => self.degree = Some(pair.as_i64()?),
            72 => self.knot_count = Some(pair.as_i64()?),
            73 => self.control_point_count = Some(pair.as_i64()?),
            74 => self.fit_point_count = Some(pair.as_i64()?),
            40 => self.knots.push(pair.as_f64()?),
            41 => self.weights.push(pair.as_f64()?),
            42 => self.knot_tolerance = Some(pair.as_f64()?),
            43 => self.control_tolerance = Some(pair.as_f64()?),
            44 => self.fit_tolerance = Some(pair.as_f64()?),
            10..=13 | 20..=23 | 30..=33 => {
                let Some(axis) = coordinate_axis(pair.code) else {
                    return Ok(false);
                };
                let value = pair.as_f64()?;
                match pair.code % 10 {
                    0 => self.control_points.push(axis, value),
                    1 => self.fit_points.push(axis, value),
                    2 => self.start_tangent.set(axis, value),
                    _ => self.end_tangent.set(axis, value),
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Finish the spline.
    ///
    /// Fails unless the number of control points read equals the declared
    /// count (code 73). Planar splines whose points all lie at z = 0 are
    /// reduced to 2D. A clamped single-segment knot vector yields a
    /// [`Bezier`](crate::entities::Bezier).
    pub fn to_entity(self, notifications: &mut NotificationCollection) -> Result<EntityType> {
        let found = self.control_points.len();
        match self.control_point_count {
            Some(declared) if declared == found as i64 => {}
            declared => {
                return Err(DxfError::parse(format!(
                    "wrong control point count: declared {}, found {}",
                    declared.map_or_else(|| "none".to_string(), |d| d.to_string()),
                    found
                )))
            }
        }

        if let Some(declared) = self.knot_count {
            if declared != self.knots.len() as i64 {
                notifications.notify(
                    NotificationType::Warning,
                    format!(
                        "SPLINE declares {} knots but {} were read",
                        declared,
                        self.knots.len()
                    ),
                );
            }
        }
        if let Some(declared) = self.fit_point_count {
            if declared != self.fit_points.len() as i64 {
                notifications.notify(
                    NotificationType::Warning,
                    format!(
                        "SPLINE declares {} fit points but {} were read",
                        declared,
                        self.fit_points.len()
                    ),
                );
            }
        }

        let mut points = self.control_points.into_points();
        let mut fit_points = self.fit_points.into_points();
        if self.flags.planar() {
            let flat = |pts: &[Point]| pts.iter().all(|p| p.z().unwrap_or(0.0) == 0.0);
            if flat(&points) {
                points = points.iter().map(Point::to_2d).collect();
            }
            if flat(&fit_points) {
                fit_points = fit_points.iter().map(Point::to_2d).collect();
            }
        }

        let mut spline = Spline::new(self.degree.unwrap_or(3), self.knots, points);
        spline.common = self.common;
        spline.flags = self.flags;
        spline.weights = self.weights;
        spline.fit_points = fit_points;
        spline.start_tangent = self.start_tangent.to_point();
        spline.end_tangent = self.end_tangent.to_point();
        spline.knot_tolerance = self.knot_tolerance;
        spline.control_tolerance = self.control_tolerance;
        spline.fit_tolerance = self.fit_tolerance;
        Ok(spline.into_entity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(code: i32, value: &str) -> DxfCodePair {
        DxfCodePair::new(code, value).unwrap()
    }

    fn feed_spline(acc: &mut SplineAccumulator, pairs: &[(i32, &str)]) {
        for (code, value) in pairs {
            assert!(acc.parse_pair(&pair(*code, value)).unwrap(), "code {}", code);
        }
    }

    #[test]
    fn test_interleaved_axes() {
        let mut acc = PointAccumulator::new();
        for (axis, v) in [
            (Axis::X, 0.0),
            (Axis::Y, 1.0),
            (Axis::X, 2.0),
            (Axis::Y, 3.0),
            (Axis::X, 4.0),
            (Axis::Y, 5.0),
        ] {
            acc.push(axis, v);
        }
        assert_eq!(
            acc.into_points(),
            vec![Point::new(0.0, 1.0), Point::new(2.0, 3.0), Point::new(4.0, 5.0)]
        );
    }

    #[test]
    fn test_grouped_axes() {
        let mut acc = PointAccumulator::new();
        for v in [0.0, 2.0, 4.0] {
            acc.push(Axis::X, v);
        }
        for v in [1.0, 3.0, 5.0] {
            acc.push(Axis::Y, v);
        }
        assert_eq!(
            acc.into_points(),
            vec![Point::new(0.0, 1.0), Point::new(2.0, 3.0), Point::new(4.0, 5.0)]
        );
    }

    #[test]
    fn test_points_keep_their_dimension() {
        let mut acc = PointAccumulator::new();
        acc.push(Axis::X, 1.0);
        acc.push(Axis::Y, 2.0);
        let points = acc.into_points();
        assert_eq!(points[0].dimension(), 2);
        assert_eq!(points[0].z(), None);
    }

    #[test]
    fn test_lwpolyline_count_mismatch_is_warning() {
        let mut acc = LwPolylineAccumulator::new();
        for (code, value) in [(90, "3"), (70, "1"), (10, "0"), (20, "0"), (10, "1"), (20, "0")] {
            assert!(acc.parse_pair(&pair(code, value)).unwrap());
        }
        assert!(!acc.parse_pair(&pair(43, "0.0")).unwrap());

        let mut notifications = NotificationCollection::new();
        let polyline = acc.to_entity(&mut notifications);
        assert!(polyline.closed);
        assert_eq!(polyline.points.len(), 2);
        assert!(notifications.has_type(NotificationType::Warning));
    }

    #[test]
    fn test_spline_wrong_control_point_count() {
        let mut acc = SplineAccumulator::new();
        feed_spline(
            &mut acc,
            &[(71, "1"), (73, "3"), (10, "0"), (20, "0"), (10, "1"), (20, "1")],
        );
        let err = acc.to_entity(&mut NotificationCollection::new()).unwrap_err();
        assert!(err.to_string().contains("wrong control point count"));
    }

    #[test]
    fn test_spline_without_declared_count() {
        let mut acc = SplineAccumulator::new();
        feed_spline(&mut acc, &[(10, "0"), (20, "0")]);
        assert!(acc.to_entity(&mut NotificationCollection::new()).is_err());
    }

    #[test]
    fn test_clamped_spline_becomes_bezier() {
        let mut acc = SplineAccumulator::new();
        feed_spline(
            &mut acc,
            &[
                (70, "8"),
                (71, "1"),
                (72, "4"),
                (73, "2"),
                (40, "0"),
                (40, "0"),
                (40, "1"),
                (40, "1"),
                (10, "0"),
                (20, "0"),
                (30, "0"),
                (10, "1"),
                (20, "1"),
                (30, "0"),
            ],
        );
        match acc.to_entity(&mut NotificationCollection::new()).unwrap() {
            EntityType::Bezier(bezier) => {
                assert_eq!(bezier.points, vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
                assert!(bezier.points.iter().all(|p| p.dimension() == 2));
                assert!(bezier.flags.planar());
            }
            other => panic!("expected Bezier, got {:?}", other),
        }
    }

    #[test]
    fn test_non_planar_keeps_z() {
        let mut acc = SplineAccumulator::new();
        feed_spline(
            &mut acc,
            &[
                (71, "1"),
                (73, "2"),
                (40, "0"),
                (40, "0"),
                (40, "1"),
                (40, "2"),
                (10, "0"),
                (20, "0"),
                (30, "0"),
                (10, "1"),
                (20, "1"),
                (30, "0"),
                (11, "0.5"),
                (21, "0.5"),
                (12, "1"),
                (22, "0"),
            ],
        );
        match acc.to_entity(&mut NotificationCollection::new()).unwrap() {
            EntityType::Spline(spline) => {
                assert_eq!(spline.degree, 1);
                assert_eq!(spline.points[1], Point::new_3d(1.0, 1.0, 0.0));
                assert_eq!(spline.fit_points, vec![Point::new(0.5, 0.5)]);
                assert_eq!(spline.start_tangent, Some(Point::new(1.0, 0.0)));
                assert_eq!(spline.end_tangent, None);
            }
            other => panic!("expected Spline, got {:?}", other),
        }
    }
}
