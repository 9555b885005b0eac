//! DXF stream writer trait

use crate::error::Result;
use crate::io::dxf::axis_code;
use crate::types::{Axis, Point, Unit};

/// Trait for writing DXF code/value pairs
pub trait DxfStreamWriter {
    /// Write a code/value pair with a string value
    fn write_string(&mut self, code: i32, value: &str) -> Result<()>;

    /// Write a code/value pair with an integer value
    fn write_i64(&mut self, code: i32, value: i64) -> Result<()>;

    /// Write a code/value pair with a plain double value
    fn write_double(&mut self, code: i32, value: f64) -> Result<()>;

    /// Write a length, converting it from `unit` into the output unit system
    fn write_length(&mut self, code: i32, value: f64, unit: Option<Unit>) -> Result<()>;

    /// Flush the writer
    fn flush(&mut self) -> Result<()>;
}

/// Extension trait for convenient writing operations
pub trait DxfStreamWriterExt: DxfStreamWriter {
    /// Write the axes of a point at `x_code`, `x_code + 10`, `x_code + 20`.
    ///
    /// Z is written when the point has one, or always with `force_z`.
    fn write_point(&mut self, x_code: i32, point: &Point, unit: Option<Unit>, force_z: bool) -> Result<()> {
        self.write_length(axis_code(x_code, Axis::X), point.x(), unit)?;
        self.write_length(axis_code(x_code, Axis::Y), point.y(), unit)?;
        match point.z() {
            Some(z) => self.write_length(axis_code(x_code, Axis::Z), z, unit)?,
            None if force_z => self.write_length(axis_code(x_code, Axis::Z), 0.0, unit)?,
            None => {}
        }
        Ok(())
    }

    /// Write a 2D point, ignoring any Z
    fn write_point2d(&mut self, x_code: i32, point: &Point, unit: Option<Unit>) -> Result<()> {
        self.write_length(axis_code(x_code, Axis::X), point.x(), unit)?;
        self.write_length(axis_code(x_code, Axis::Y), point.y(), unit)
    }

    /// Write common entity header
    fn write_entity_type(&mut self, entity_type: &str) -> Result<()> {
        self.write_string(0, entity_type)
    }

    /// Write section start
    fn write_section_start(&mut self, section_name: &str) -> Result<()> {
        self.write_string(0, "SECTION")?;
        self.write_string(2, section_name)?;
        Ok(())
    }

    /// Write section end
    fn write_section_end(&mut self) -> Result<()> {
        self.write_string(0, "ENDSEC")
    }

    /// Write end of file
    fn write_eof(&mut self) -> Result<()> {
        self.write_string(0, "EOF")
    }
}

// Auto-implement the extension trait for all stream writers
impl<T: DxfStreamWriter + ?Sized> DxfStreamWriterExt for T {}
