//! The parsed DXF document

use crate::entities::EntityType;
use crate::notification::NotificationCollection;
use crate::types::{Point, Unit};
use indexmap::IndexMap;

/// Value of a header variable, with the group code it was read from
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    Text { code: i32, value: String },
    Integer { code: i32, value: i64 },
    Float { code: i32, value: f64 },
    /// Coordinates given by codes `base_code`, `base_code + 10`, `base_code + 20`
    Point { base_code: i32, point: Point },
}

impl HeaderValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeaderValue::Text { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            HeaderValue::Integer { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            HeaderValue::Float { value, .. } => Some(*value),
            HeaderValue::Integer { value, .. } => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_point(&self) -> Option<Point> {
        match self {
            HeaderValue::Point { point, .. } => Some(*point),
            _ => None,
        }
    }
}

/// A DXF document: header variables and the entities of the ENTITIES section.
///
/// Built once by the reader; entity order is file order.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Header variables keyed by name (including the leading `$`)
    pub header: IndexMap<String, HeaderValue>,
    /// Entities in file order
    pub entities: Vec<EntityType>,
    /// Diagnostics collected while reading
    pub notifications: NotificationCollection,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entities(&self) -> impl Iterator<Item = &EntityType> {
        self.entities.iter()
    }

    pub fn add_entity(&mut self, entity: EntityType) {
        self.entities.push(entity);
    }

    /// Look up a header variable
    pub fn header_value(&self, name: &str) -> Option<&HeaderValue> {
        self.header.get(name)
    }

    /// Drawing units declared by `$INSUNITS`, if any
    pub fn units(&self) -> Option<Unit> {
        self.header_value("$INSUNITS")
            .and_then(HeaderValue::as_i64)
            .and_then(Unit::from_insunits)
    }
}
