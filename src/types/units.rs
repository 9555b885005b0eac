//! Length units and conversion between unit systems

use crate::error::{DxfError, Result};
use std::fmt;

/// Unit a length value is tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Inches,
    Feet,
    Millimeters,
    Centimeters,
    Meters,
}

impl Unit {
    /// Size of one unit in millimeters
    pub fn millimeters_per_unit(self) -> f64 {
        match self {
            Unit::Inches => 25.4,
            Unit::Feet => 304.8,
            Unit::Millimeters => 1.0,
            Unit::Centimeters => 10.0,
            Unit::Meters => 1000.0,
        }
    }

    /// Map a `$INSUNITS` header value to a unit
    pub fn from_insunits(code: i64) -> Option<Unit> {
        match code {
            1 => Some(Unit::Inches),
            2 => Some(Unit::Feet),
            4 => Some(Unit::Millimeters),
            5 => Some(Unit::Centimeters),
            6 => Some(Unit::Meters),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::Inches => "in",
            Unit::Feet => "ft",
            Unit::Millimeters => "mm",
            Unit::Centimeters => "cm",
            Unit::Meters => "m",
        };
        write!(f, "{}", name)
    }
}

/// Target unit system for written files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitSystem {
    Inches,
    #[default]
    Millimeters,
}

impl UnitSystem {
    pub fn unit(self) -> Unit {
        match self {
            UnitSystem::Inches => Unit::Inches,
            UnitSystem::Millimeters => Unit::Millimeters,
        }
    }
}

/// A length value tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub fn new(value: f64, unit: Unit) -> Self {
        Length { value, unit }
    }

    pub fn inches(value: f64) -> Self {
        Length::new(value, Unit::Inches)
    }

    pub fn millimeters(value: f64) -> Self {
        Length::new(value, Unit::Millimeters)
    }

    /// Convert to the given unit.
    ///
    /// Non-finite values are rejected.
    pub fn to(&self, target: Unit) -> Result<f64> {
        if !self.value.is_finite() {
            return Err(DxfError::Units(format!(
                "cannot convert non-finite length {}{} to {}",
                self.value, self.unit, target
            )));
        }
        if self.unit == target {
            return Ok(self.value);
        }
        Ok(self.value * self.unit.millimeters_per_unit() / target.millimeters_per_unit())
    }
}

/// Convert a possibly tagged value into the target system.
///
/// Untagged values pass through unchanged.
pub fn convert_value(value: f64, unit: Option<Unit>, target: UnitSystem) -> Result<f64> {
    match unit {
        Some(unit) => Length::new(value, unit).to(target.unit()),
        None => Ok(value),
    }
}
