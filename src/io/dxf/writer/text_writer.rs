//! ASCII DXF writer

use super::format::{format_general, format_value, DEFAULT_PRECISION};
use super::stream_writer::DxfStreamWriter;
use crate::error::Result;
use crate::types::{Unit, UnitSystem};
use std::io::Write;

/// ASCII DXF stream writer.
///
/// Lines are separated by `\n`; the last line is not terminated. Codes are
/// written without padding.
pub struct DxfTextWriter<W: Write> {
    writer: W,
    units: UnitSystem,
    precision: Option<usize>,
    started: bool,
}

impl<W: Write> DxfTextWriter<W> {
    /// Create a new ASCII DXF writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            units: UnitSystem::default(),
            precision: Some(DEFAULT_PRECISION),
            started: false,
        }
    }

    /// Unit system tagged lengths are converted into
    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    /// Significant digits for floats; `None` for shortest round-trip text
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        if self.started {
            self.writer.write_all(b"\n")?;
        }
        self.writer.write_all(line.as_bytes())?;
        self.started = true;
        Ok(())
    }

    fn write_code(&mut self, code: i32) -> Result<()> {
        self.write_line(&code.to_string())
    }

    /// Get the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DxfStreamWriter for DxfTextWriter<W> {
    fn write_string(&mut self, code: i32, value: &str) -> Result<()> {
        self.write_code(code)?;
        self.write_line(value)
    }

    fn write_i64(&mut self, code: i32, value: i64) -> Result<()> {
        self.write_code(code)?;
        self.write_line(&value.to_string())
    }

    fn write_double(&mut self, code: i32, value: f64) -> Result<()> {
        self.write_code(code)?;
        let text = format_general(value, self.precision);
        self.write_line(&text)
    }

    fn write_length(&mut self, code: i32, value: f64, unit: Option<Unit>) -> Result<()> {
        let text = format_value(value, unit, self.units, self.precision)?;
        self.write_code(code)?;
        self.write_line(&text)
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::writer::DxfStreamWriterExt;
    use crate::types::Point;

    fn written(build: impl FnOnce(&mut DxfTextWriter<Vec<u8>>)) -> String {
        let mut writer = DxfTextWriter::new(Vec::new());
        build(&mut writer);
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_lines_joined_without_trailing_newline() {
        let text = written(|w| {
            w.write_section_start("ENTITIES").unwrap();
            w.write_section_end().unwrap();
        });
        assert_eq!(text, "0\nSECTION\n2\nENTITIES\n0\nENDSEC");
    }

    #[test]
    fn test_numbers() {
        let text = written(|w| {
            w.write_i64(90, 4).unwrap();
            w.write_double(40, 0.25).unwrap();
        });
        assert_eq!(text, "90\n4\n40\n0.25");
    }

    #[test]
    fn test_point_axes() {
        let text = written(|w| {
            w.write_point(10, &Point::new(1.0, 2.0), None, false).unwrap();
            w.write_point(11, &Point::new(1.0, 2.0), None, true).unwrap();
        });
        assert_eq!(text, "10\n1\n20\n2\n11\n1\n21\n2\n31\n0");
    }

    #[test]
    fn test_lengths_are_converted() {
        let mut writer = DxfTextWriter::new(Vec::new()).with_units(UnitSystem::Inches);
        writer.write_length(40, 25.4, Some(Unit::Millimeters)).unwrap();
        writer.write_length(41, 25.4, None).unwrap();
        assert_eq!(String::from_utf8(writer.into_inner()).unwrap(), "40\n1\n41\n25.4");
    }

    #[test]
    fn test_shortest_precision() {
        let mut writer = DxfTextWriter::new(Vec::new()).with_precision(None);
        writer.write_double(40, 1.0 / 3.0).unwrap();
        assert_eq!(
            String::from_utf8(writer.into_inner()).unwrap(),
            "40\n0.3333333333333333"
        );
    }
}
