//! DXF section writers
//!
//! Flattens entities, sketch trees and header variables into code/value
//! pairs. Shapes inside nested sketches are written with the composed
//! transform of every enclosing sketch.

use crate::document::HeaderValue;
use crate::entities::*;
use crate::error::Result;
use crate::sketch::{Element, Geometry, Sketch};
use crate::types::{Point, Transform, Unit};
use indexmap::IndexMap;

use super::stream_writer::{DxfStreamWriter, DxfStreamWriterExt};

/// Writes DXF sections
pub struct SectionWriter<'a, W: DxfStreamWriter> {
    writer: &'a mut W,
}

impl<'a, W: DxfStreamWriter> SectionWriter<'a, W> {
    /// Create a new section writer
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }

    /// The underlying stream writer
    pub fn writer(&mut self) -> &mut W {
        &mut *self.writer
    }

    /// Write the HEADER section with the given variables
    pub fn write_header(&mut self, header: Option<&IndexMap<String, HeaderValue>>) -> Result<()> {
        self.writer.write_section_start("HEADER")?;
        for (name, value) in header.into_iter().flatten() {
            self.writer.write_string(9, name)?;
            match value {
                HeaderValue::Text { code, value } => self.writer.write_string(*code, value)?,
                HeaderValue::Integer { code, value } => self.writer.write_i64(*code, *value)?,
                HeaderValue::Float { code, value } => self.writer.write_double(*code, *value)?,
                HeaderValue::Point { base_code, point } => {
                    self.writer.write_point(*base_code, point, None, false)?
                }
            }
        }
        self.writer.write_section_end()
    }

    /// Write a sketch tree.
    ///
    /// `accumulated` is the transform inherited from enclosing sketches; the
    /// sketch's own transform is applied before it.
    pub fn write_sketch(&mut self, sketch: &Sketch, accumulated: Option<&Transform>) -> Result<()> {
        let combined = match (accumulated, sketch.transformation.as_ref()) {
            (Some(parent), Some(own)) => Some(parent.compose(own)),
            (Some(parent), None) => Some(*parent),
            (None, own) => own.copied(),
        };
        for element in sketch.elements() {
            self.write_element(element, combined.as_ref())?;
        }
        Ok(())
    }

    /// Write one element of a sketch
    pub fn write_element(&mut self, element: &Element, transform: Option<&Transform>) -> Result<()> {
        match element {
            Element::Shape { geometry, units } => self.write_geometry(geometry, transform, *units),
            Element::Sketch(sketch) => self.write_sketch(sketch, transform),
        }
    }

    /// Write a shape through its entity template
    pub fn write_geometry(
        &mut self,
        geometry: &Geometry,
        transform: Option<&Transform>,
        units: Option<Unit>,
    ) -> Result<()> {
        let entity = geometry.to_entity()?;
        self.write_entity(&entity, transform, units)
    }

    /// Write an entity, applying `transform` to its geometry and converting
    /// its lengths from `units`
    pub fn write_entity(
        &mut self,
        entity: &EntityType,
        transform: Option<&Transform>,
        units: Option<Unit>,
    ) -> Result<()> {
        let placement = Placement { transform, units };
        match entity {
            EntityType::Circle(circle) => self.write_circle(circle, &placement),
            EntityType::Arc(arc) => self.write_arc(arc, &placement),
            EntityType::Line(line) => self.write_line(line, &placement),
            EntityType::LwPolyline(polyline) => self.write_lwpolyline(polyline, &placement),
            EntityType::Spline(spline) => self.write_spline(spline, &placement),
            EntityType::Bezier(bezier) => self.write_bezier(bezier, &placement),
        }
    }

    /// Handle, layer and color, each only when set
    fn write_common_entity_data(&mut self, entity: &dyn Entity) -> Result<()> {
        if let Some(handle) = entity.handle() {
            self.writer.write_string(5, handle)?;
        }
        if let Some(layer) = entity.layer() {
            self.writer.write_string(8, layer)?;
        }
        if let Some(color) = entity.color_number() {
            self.writer.write_i64(62, color)?;
        }
        Ok(())
    }

    /// Write CIRCLE entity
    fn write_circle(&mut self, circle: &Circle, placement: &Placement) -> Result<()> {
        self.writer.write_entity_type("CIRCLE")?;
        self.write_common_entity_data(circle)?;
        self.writer
            .write_point(10, &placement.point(&circle.center), placement.units, false)?;
        self.writer
            .write_length(40, placement.length(circle.radius), placement.units)
    }

    /// Write ARC entity
    fn write_arc(&mut self, arc: &Arc, placement: &Placement) -> Result<()> {
        self.writer.write_entity_type("ARC")?;
        self.write_common_entity_data(arc)?;
        self.writer
            .write_point(10, &placement.point(&arc.center), placement.units, false)?;
        self.writer
            .write_length(40, placement.length(arc.radius), placement.units)?;
        self.writer.write_double(50, placement.angle(arc.start_angle))?;
        self.writer.write_double(51, placement.angle(arc.end_angle))
    }

    /// Write LINE entity
    fn write_line(&mut self, line: &Line, placement: &Placement) -> Result<()> {
        self.writer.write_entity_type("LINE")?;
        self.write_common_entity_data(line)?;
        self.writer
            .write_point(10, &placement.point(&line.first()), placement.units, false)?;
        self.writer
            .write_point(11, &placement.point(&line.last()), placement.units, false)
    }

    /// Write LWPOLYLINE entity
    fn write_lwpolyline(&mut self, polyline: &LwPolyline, placement: &Placement) -> Result<()> {
        self.writer.write_entity_type("LWPOLYLINE")?;
        self.write_common_entity_data(polyline)?;
        self.writer.write_i64(90, polyline.points.len() as i64)?;
        self.writer.write_i64(70, i64::from(polyline.closed))?;
        for vertex in &polyline.points {
            self.writer
                .write_point2d(10, &placement.point(vertex), placement.units)?;
        }
        Ok(())
    }

    /// Write SPLINE entity
    fn write_spline(&mut self, spline: &Spline, placement: &Placement) -> Result<()> {
        self.writer.write_entity_type("SPLINE")?;
        self.write_common_entity_data(spline)?;
        self.writer.write_i64(70, spline.flags.bits())?;
        self.writer.write_i64(71, spline.degree)?;
        self.writer.write_i64(72, spline.knots.len() as i64)?;
        self.writer.write_i64(73, spline.points.len() as i64)?;
        self.writer.write_i64(74, spline.fit_points.len() as i64)?;

        for (code, tolerance) in [
            (42, spline.knot_tolerance),
            (43, spline.control_tolerance),
            (44, spline.fit_tolerance),
        ] {
            if let Some(tolerance) = tolerance {
                self.writer.write_length(code, tolerance, placement.units)?;
            }
        }
        if let Some(tangent) = &spline.start_tangent {
            self.writer.write_point(12, &placement.vector(tangent), None, false)?;
        }
        if let Some(tangent) = &spline.end_tangent {
            self.writer.write_point(13, &placement.vector(tangent), None, false)?;
        }

        for knot in &spline.knots {
            self.writer.write_double(40, *knot)?;
        }
        for weight in &spline.weights {
            self.writer.write_double(41, *weight)?;
        }
        for point in &spline.points {
            self.writer
                .write_point(10, &placement.point(point), placement.units, false)?;
        }
        for point in &spline.fit_points {
            self.writer
                .write_point(11, &placement.point(point), placement.units, false)?;
        }
        Ok(())
    }

    /// Write a Bézier curve as a single-segment SPLINE
    fn write_bezier(&mut self, bezier: &Bezier, placement: &Placement) -> Result<()> {
        let count = bezier.points.len();
        self.writer.write_entity_type("SPLINE")?;
        self.write_common_entity_data(bezier)?;
        self.writer.write_i64(70, bezier.flags.bits())?;
        self.writer.write_i64(71, bezier.degree() as i64)?;
        self.writer.write_i64(72, 2 * count as i64)?;
        self.writer.write_i64(73, count as i64)?;
        self.writer.write_i64(74, 0)?;
        for knot in std::iter::repeat(0.0).take(count).chain(std::iter::repeat(1.0).take(count)) {
            self.writer.write_double(40, knot)?;
        }
        for point in &bezier.points {
            self.writer
                .write_point(10, &placement.point(point), placement.units, false)?;
        }
        Ok(())
    }
}

/// Transform and unit tag in effect for one entity
struct Placement<'t> {
    transform: Option<&'t Transform>,
    units: Option<Unit>,
}

impl Placement<'_> {
    fn point(&self, point: &Point) -> Point {
        match self.transform {
            Some(t) => t.apply(point),
            None => *point,
        }
    }

    /// Direction vector: the transform without its translation
    fn vector(&self, vector: &Point) -> Point {
        match self.transform {
            Some(t) => {
                let origin = t.apply(&Point::from_slice(&[0.0; 3][..vector.dimension()]));
                t.apply(vector) - origin
            }
            None => *vector,
        }
    }

    fn length(&self, length: f64) -> f64 {
        match self.transform {
            Some(t) => length * t.scale_factor(),
            None => length,
        }
    }

    fn angle(&self, degrees: f64) -> f64 {
        match self.transform {
            Some(t) => degrees + t.rotation_degrees(),
            None => degrees,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::writer::DxfTextWriter;

    fn entities(build: impl FnOnce(&mut SectionWriter<DxfTextWriter<Vec<u8>>>)) -> String {
        let mut writer = DxfTextWriter::new(Vec::new());
        build(&mut SectionWriter::new(&mut writer));
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_line_template() {
        let text = entities(|w| {
            w.write_geometry(&Geometry::line([0.0, 0.0], [1.0, 1.0]), None, None)
                .unwrap()
        });
        assert_eq!(text, "0\nLINE\n8\n0\n10\n0\n20\n0\n11\n1\n21\n1");
    }

    #[test]
    fn test_rectangle_is_one_lwpolyline() {
        let text = entities(|w| {
            w.write_geometry(&Geometry::rectangle([0.0, 0.0], [2.0, 1.0]), None, None)
                .unwrap()
        });
        assert_eq!(
            text,
            "0\nLWPOLYLINE\n8\n0\n90\n4\n70\n1\n10\n0\n20\n0\n10\n2\n20\n0\n10\n2\n20\n1\n10\n0\n20\n1"
        );
    }

    #[test]
    fn test_arc_is_rotated_and_scaled() {
        let transform = Transform::from_rotation_degrees(90.0).then(&Transform::from_scale(2.0));
        let text = entities(|w| {
            w.write_geometry(&Geometry::arc([0.0, 0.0], 1.0, 0.0, 45.0), Some(&transform), None)
                .unwrap()
        });
        assert_eq!(text, "0\nARC\n10\n0\n20\n0\n40\n2\n50\n90\n51\n135");
    }

    #[test]
    fn test_common_fields_only_when_set() {
        let mut circle = Circle::new(Point::new(0.0, 0.0), 1.0);
        circle.common.handle = Some("2F".to_string());
        circle.common.color_number = Some(1);
        let text = entities(|w| {
            w.write_entity(&EntityType::Circle(circle), None, None).unwrap()
        });
        assert_eq!(text, "0\nCIRCLE\n5\n2F\n62\n1\n10\n0\n20\n0\n40\n1");
    }

    #[test]
    fn test_bezier_as_spline() {
        let bezier = Bezier::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        let text = entities(|w| {
            w.write_entity(&EntityType::Bezier(bezier), None, None).unwrap()
        });
        assert_eq!(
            text,
            "0\nSPLINE\n70\n0\n71\n1\n72\n4\n73\n2\n74\n0\n40\n0\n40\n0\n40\n1\n40\n1\n10\n0\n20\n0\n10\n1\n20\n1"
        );
    }

    #[test]
    fn test_nested_sketch_composes_child_first() {
        let mut inner = Sketch::with_transformation(Transform::from_scale(2.0));
        inner.push(Geometry::line([1.0, 0.0], [1.0, 1.0]));
        let mut outer = Sketch::with_transformation(Transform::from_translation(Point::new(10.0, 0.0)));
        outer.push_sketch(inner);

        let text = entities(|w| w.write_sketch(&outer, None).unwrap());
        assert_eq!(text, "0\nLINE\n8\n0\n10\n12\n20\n0\n11\n12\n21\n2");
    }

    #[test]
    fn test_point_has_no_template() {
        let mut writer = DxfTextWriter::new(Vec::new());
        let result = SectionWriter::new(&mut writer).write_geometry(
            &Geometry::Point(Point::new(0.0, 0.0)),
            None,
            None,
        );
        assert!(matches!(result, Err(crate::error::DxfError::Unparse(_))));
    }
}
