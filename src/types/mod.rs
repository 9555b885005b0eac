//! Core geometric and unit types

pub mod point;
pub mod transform;
pub mod units;

pub use point::{Axis, PartialPoint, Point};
pub use transform::{Matrix4, Transform};
pub use units::{convert_value, Length, Unit, UnitSystem};
