//! Drawing entities read from and written to the ENTITIES section

macro_rules! impl_entity {
    ($ty:ty, $keyword:literal) => {
        impl $crate::entities::Entity for $ty {
            fn common(&self) -> &$crate::entities::EntityCommon {
                &self.common
            }

            fn common_mut(&mut self) -> &mut $crate::entities::EntityCommon {
                &mut self.common
            }

            fn entity_type(&self) -> &'static str {
                $keyword
            }
        }
    };
}

pub mod arc;
pub mod bezier;
pub mod circle;
pub mod line;
pub mod lwpolyline;
pub mod spline;

pub use arc::Arc;
pub use bezier::{binomial, is_single_bezier_segment, Bezier};
pub use circle::Circle;
pub use line::Line;
pub use lwpolyline::LwPolyline;
pub use spline::{Spline, SplineFlags};

/// Base trait for all entities
pub trait Entity {
    /// Common entity data
    fn common(&self) -> &EntityCommon;

    /// Mutable common entity data
    fn common_mut(&mut self) -> &mut EntityCommon;

    /// DXF keyword of the entity (the value of its code 0 pair)
    fn entity_type(&self) -> &'static str;

    /// Handle (code 5)
    fn handle(&self) -> Option<&str> {
        self.common().handle.as_deref()
    }

    /// Layer name (code 8)
    fn layer(&self) -> Option<&str> {
        self.common().layer.as_deref()
    }

    /// Color number (code 62)
    fn color_number(&self) -> Option<i64> {
        self.common().color_number
    }
}

/// Data shared by every entity.
///
/// All fields are optional: a field that was absent in the file stays absent
/// when the entity is written back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityCommon {
    pub handle: Option<String>,
    pub layer: Option<String>,
    pub color_number: Option<i64>,
}

impl EntityCommon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a specific layer
    pub fn with_layer(layer: impl Into<String>) -> Self {
        EntityCommon {
            layer: Some(layer.into()),
            ..Self::new()
        }
    }
}

/// The entity variants this crate reads and writes
#[derive(Debug, Clone, PartialEq)]
pub enum EntityType {
    Circle(Circle),
    Arc(Arc),
    Line(Line),
    LwPolyline(LwPolyline),
    Spline(Spline),
    /// A spline whose knot vector makes it a single Bézier segment
    Bezier(Bezier),
}

impl EntityType {
    /// Get a reference to the entity trait object
    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::Line(e) => e,
            EntityType::LwPolyline(e) => e,
            EntityType::Spline(e) => e,
            EntityType::Bezier(e) => e,
        }
    }

    /// Get a mutable reference to the entity trait object
    pub fn as_entity_mut(&mut self) -> &mut dyn Entity {
        match self {
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::Line(e) => e,
            EntityType::LwPolyline(e) => e,
            EntityType::Spline(e) => e,
            EntityType::Bezier(e) => e,
        }
    }

    pub fn entity_type(&self) -> &'static str {
        self.as_entity().entity_type()
    }
}
