//! Group code classification
//!
//! The meaning of a value line depends only on the numeric range of the
//! group code that precedes it.

use crate::types::Axis;

/// Value type carried by a group code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupCodeValueType {
    /// Text, left as read
    Text,
    /// Double precision float
    Double,
    /// Integer
    Integer,
}

impl GroupCodeValueType {
    /// Classify a group code by its numeric range
    pub fn from_code(code: i32) -> Self {
        match code {
            1..=9 => GroupCodeValueType::Text,
            10..=18 | 20..=28 | 30..=37 | 40..=49 | 50..=58 => GroupCodeValueType::Double,
            70..=78 | 90..=99 | 270..=289 => GroupCodeValueType::Integer,
            _ => GroupCodeValueType::Text,
        }
    }
}

/// Axis of a coordinate code: 10–13 are X, 20–23 are Y, 30–33 are Z
pub fn coordinate_axis(code: i32) -> Option<Axis> {
    match code {
        10..=13 => Some(Axis::X),
        20..=23 => Some(Axis::Y),
        30..=33 => Some(Axis::Z),
        _ => None,
    }
}

/// Group code for `axis` of the point family starting at `x_code` (10, 11, ...)
pub fn axis_code(x_code: i32, axis: Axis) -> i32 {
    x_code + 10 * axis.index() as i32
}

/// Common group codes
pub mod codes {
    pub const ENTITY_TYPE: i32 = 0;
    pub const NAME: i32 = 2;
    pub const HANDLE: i32 = 5;
    pub const LAYER: i32 = 8;
    pub const VARIABLE_NAME: i32 = 9;
    pub const COLOR: i32 = 62;
    pub const COMMENT: i32 = 999;
}
