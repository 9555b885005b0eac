//! Geometric shapes that can be placed in a sketch

use crate::entities::{Arc, Circle, EntityType, Line, LwPolyline};
use crate::error::{DxfError, Result};
use crate::types::Point;

/// A shape in a sketch
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Line { first: Point, last: Point },
    Arc { center: Point, radius: f64, start_angle: f64, end_angle: f64 },
    Circle { center: Point, radius: f64 },
    Polyline { points: Vec<Point>, closed: bool },
    Polygon(Vec<Point>),
    /// Axis-aligned rectangle between two opposite corners
    Rectangle { first: Point, second: Point },
    /// Axis-aligned square from its lower-left corner
    Square { origin: Point, size: f64 },
    Triangle([Point; 3]),
    /// A bare point; there is no DXF entity for it in this crate
    Point(Point),
}

impl Geometry {
    pub fn line(first: impl Into<Point>, last: impl Into<Point>) -> Self {
        Geometry::Line {
            first: first.into(),
            last: last.into(),
        }
    }

    pub fn circle(center: impl Into<Point>, radius: f64) -> Self {
        Geometry::Circle {
            center: center.into(),
            radius,
        }
    }

    pub fn arc(center: impl Into<Point>, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Geometry::Arc {
            center: center.into(),
            radius,
            start_angle,
            end_angle,
        }
    }

    pub fn polygon<P: Into<Point>>(points: impl IntoIterator<Item = P>) -> Self {
        Geometry::Polygon(points.into_iter().map(Into::into).collect())
    }

    pub fn polyline<P: Into<Point>>(points: impl IntoIterator<Item = P>) -> Self {
        Geometry::Polyline {
            points: points.into_iter().map(Into::into).collect(),
            closed: false,
        }
    }

    pub fn rectangle(first: impl Into<Point>, second: impl Into<Point>) -> Self {
        Geometry::Rectangle {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Short name of the shape kind
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Line { .. } => "line",
            Geometry::Arc { .. } => "arc",
            Geometry::Circle { .. } => "circle",
            Geometry::Polyline { .. } => "polyline",
            Geometry::Polygon(_) => "polygon",
            Geometry::Rectangle { .. } => "rectangle",
            Geometry::Square { .. } => "square",
            Geometry::Triangle(_) => "triangle",
            Geometry::Point(_) => "point",
        }
    }

    /// Vertices of a polygonal shape, counter-clockwise for rectangles and
    /// squares starting at the first corner
    pub fn points(&self) -> Vec<Point> {
        match self {
            Geometry::Line { first, last } => vec![*first, *last],
            Geometry::Polyline { points, .. } | Geometry::Polygon(points) => points.clone(),
            Geometry::Rectangle { first, second } => vec![
                *first,
                Point::new(second.x(), first.y()),
                *second,
                Point::new(first.x(), second.y()),
            ],
            Geometry::Square { origin, size } => vec![
                *origin,
                Point::new(origin.x() + size, origin.y()),
                Point::new(origin.x() + size, origin.y() + size),
                Point::new(origin.x(), origin.y() + size),
            ],
            Geometry::Triangle(points) => points.to_vec(),
            Geometry::Point(point) => vec![*point],
            Geometry::Arc { center, .. } | Geometry::Circle { center, .. } => vec![*center],
        }
    }

    /// Whether the shape's outline returns to its first vertex
    pub fn is_closed(&self) -> bool {
        match self {
            Geometry::Polyline { closed, .. } => *closed,
            Geometry::Polygon(_)
            | Geometry::Rectangle { .. }
            | Geometry::Square { .. }
            | Geometry::Triangle(_)
            | Geometry::Circle { .. } => true,
            Geometry::Line { .. } | Geometry::Arc { .. } | Geometry::Point(_) => false,
        }
    }

    /// Edges of the outline, including the closing edge of closed shapes
    pub fn edges(&self) -> Vec<(Point, Point)> {
        let points = self.points();
        if matches!(self, Geometry::Arc { .. } | Geometry::Circle { .. } | Geometry::Point(_)) {
            return Vec::new();
        }
        let mut edges: Vec<(Point, Point)> = points.windows(2).map(|w| (w[0], w[1])).collect();
        if self.is_closed() && points.len() > 2 {
            edges.push((points[points.len() - 1], points[0]));
        }
        edges
    }

    /// The DXF entity a shape is written as.
    ///
    /// Every polygonal shape becomes one LWPOLYLINE. Entities are put on
    /// layer `0`, except arcs, which carry no layer.
    pub fn to_entity(&self) -> Result<EntityType> {
        let mut entity = match self {
            Geometry::Line { first, last } => EntityType::Line(Line::new(*first, *last)),
            Geometry::Arc { center, radius, start_angle, end_angle } => {
                EntityType::Arc(Arc::new(*center, *radius, *start_angle, *end_angle))
            }
            Geometry::Circle { center, radius } => EntityType::Circle(Circle::new(*center, *radius)),
            Geometry::Polyline { .. }
            | Geometry::Polygon(_)
            | Geometry::Rectangle { .. }
            | Geometry::Square { .. }
            | Geometry::Triangle(_) => {
                let mut polyline = LwPolyline::from_points(self.points());
                polyline.closed = self.is_closed();
                EntityType::LwPolyline(polyline)
            }
            Geometry::Point(_) => {
                return Err(DxfError::Unparse(format!(
                    "no DXF template for a {}",
                    self.kind()
                )))
            }
        };
        if !matches!(self, Geometry::Arc { .. }) {
            entity.as_entity_mut().common_mut().layer = Some("0".to_string());
        }
        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_points() {
        let rect = Geometry::rectangle([0.0, 0.0], [1.0, 1.0]);
        assert_eq!(
            rect.points(),
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
            ]
        );
        assert_eq!(rect.edges().len(), 4);
    }

    #[test]
    fn test_open_polyline_edges() {
        let polyline = Geometry::polyline([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        assert_eq!(polyline.edges().len(), 3);
        assert!(!polyline.is_closed());
    }

    #[test]
    fn test_square_matches_rectangle() {
        let square = Geometry::Square { origin: Point::new(0.0, 0.0), size: 1.0 };
        assert_eq!(square.points(), Geometry::rectangle([0.0, 0.0], [1.0, 1.0]).points());
    }

    #[test]
    fn test_polygon_becomes_closed_lwpolyline() {
        let polygon = Geometry::polygon([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
        match polygon.to_entity().unwrap() {
            EntityType::LwPolyline(p) => {
                assert!(p.closed);
                assert_eq!(p.points.len(), 3);
                assert_eq!(p.common.layer.as_deref(), Some("0"));
            }
            other => panic!("expected LwPolyline, got {:?}", other),
        }
    }

    #[test]
    fn test_arc_has_no_layer() {
        match Geometry::arc([0.0, 0.0], 1.0, 0.0, 90.0).to_entity().unwrap() {
            EntityType::Arc(arc) => assert_eq!(arc.common.layer, None),
            other => panic!("expected Arc, got {:?}", other),
        }
        match Geometry::circle([0.0, 0.0], 1.0).to_entity().unwrap() {
            EntityType::Circle(circle) => assert_eq!(circle.common.layer.as_deref(), Some("0")),
            other => panic!("expected Circle, got {:?}", other),
        }
    }

    #[test]
    fn test_point_has_no_template() {
        let err = Geometry::Point(Point::new(1.0, 1.0)).to_entity().unwrap_err();
        assert!(matches!(err, DxfError::Unparse(_)));
    }
}
