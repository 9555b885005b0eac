//! Sketch container: a tree of shapes and nested sketches, each level with an
//! optional transform

pub mod geometry;

pub use geometry::Geometry;

use crate::types::{Point, Transform, Unit};

/// An entry of a sketch
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A shape, optionally tagged with the unit of its coordinates and lengths
    Shape { geometry: Geometry, units: Option<Unit> },
    /// A nested sketch
    Sketch(Sketch),
}

/// A drawing made of shapes and nested sketches
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sketch {
    elements: Vec<Element>,
    /// Transform applied to everything inside this sketch
    pub transformation: Option<Transform>,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transformation(transformation: Transform) -> Self {
        Sketch {
            elements: Vec::new(),
            transformation: Some(transformation),
        }
    }

    /// Add an untagged shape
    pub fn push(&mut self, geometry: Geometry) -> &mut Self {
        self.elements.push(Element::Shape { geometry, units: None });
        self
    }

    /// Add a shape whose values are in `unit`
    pub fn push_with_units(&mut self, geometry: Geometry, unit: Unit) -> &mut Self {
        self.elements.push(Element::Shape {
            geometry,
            units: Some(unit),
        });
        self
    }

    /// Add a nested sketch as is
    pub fn push_sketch(&mut self, sketch: Sketch) -> &mut Self {
        self.elements.push(Element::Sketch(sketch));
        self
    }

    /// Add a nested sketch placed with its origin at `origin`.
    ///
    /// The translation is applied after the nested sketch's own transform.
    pub fn push_sketch_at(&mut self, mut sketch: Sketch, origin: impl Into<Point>) -> &mut Self {
        let translation = Transform::from_translation(origin.into());
        sketch.transformation = Some(match sketch.transformation {
            Some(own) => translation.compose(&own),
            None => translation,
        });
        self.push_sketch(sketch)
    }

    /// Add a group: a nested sketch at `origin` filled by `build`
    pub fn group(&mut self, origin: impl Into<Point>, build: impl FnOnce(&mut Sketch)) -> &mut Self {
        let mut group = Sketch::new();
        build(&mut group);
        self.push_sketch_at(group, origin)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
